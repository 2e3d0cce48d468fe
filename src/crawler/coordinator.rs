//! Crawl coordinator - main crawl orchestration
//!
//! Drives one crawl run end to end:
//! - Normalize the target into the crawl base
//! - Resolve robots rules and sitemap URLs once at startup
//! - Seed the frontier and spawn the fixed worker pool
//! - Race the pool against the whole-crawl deadline
//! - Assemble the deduplicated, length-bounded result
//!
//! Per-page failures (timeouts, non-2xx statuses, unresolvable links) are
//! absorbed where they occur; a page is either collected or never seen again
//! in this run. Only an unusable target URL fails the run itself.

use crate::crawler::{
    fetch_page, parse_page, CrawlLimits, CrawlPolicy, CrawlResult, Frontier, PageRecord,
    CONCURRENCY, CRAWL_DEADLINE,
};
use crate::robots::fetch_robots;
use crate::sitemap::resolve_sitemaps;
use crate::url::normalize_base;
use crate::CrawlError;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Runs one complete crawl against a target URL
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `target` - The crawl target as supplied by the caller
/// * `limits` - Page-count and depth limits for this run
///
/// # Returns
///
/// * `Ok(CrawlResult)` - The assembled result; possibly cut short by the deadline
/// * `Err(CrawlError)` - The target did not parse as a crawlable URL
pub async fn run_crawl(
    client: &Client,
    target: &str,
    limits: CrawlLimits,
) -> Result<CrawlResult, CrawlError> {
    let base = normalize_base(target)?;
    tracing::info!("Starting crawl of {} (limits: {:?})", base, limits);

    let rules = fetch_robots(client, &base).await;
    tracing::debug!(
        "Robots rules: {} disallow prefixes, {} sitemap directives",
        rules.disallow.len(),
        rules.sitemaps.len()
    );

    let sitemap_urls = resolve_sitemaps(client, &base, &rules.sitemaps).await;

    let policy = Arc::new(CrawlPolicy::new(base.clone(), rules));
    let frontier = Arc::new(Frontier::new(limits.max_pages));
    frontier.seed(std::iter::once(base.clone()).chain(sitemap_urls));

    let start = std::time::Instant::now();
    let mut workers = JoinSet::new();
    for _ in 0..CONCURRENCY {
        workers.spawn(worker_loop(
            client.clone(),
            Arc::clone(&frontier),
            Arc::clone(&policy),
            limits.max_depth,
        ));
    }

    let drained = tokio::time::timeout(CRAWL_DEADLINE, async {
        while workers.join_next().await.is_some() {}
    })
    .await;

    if drained.is_err() {
        tracing::warn!(
            "Crawl deadline of {:?} reached for {} with {} pages collected, aborting in-flight work",
            CRAWL_DEADLINE,
            base,
            frontier.pages_collected()
        );
        workers.abort_all();
        while workers.join_next().await.is_some() {}
    }

    let pages = assemble_pages(frontier.take_pages(), limits.max_pages);
    tracing::info!(
        "Crawl of {} finished: {} pages in {:?}",
        base,
        pages.len(),
        start.elapsed()
    );

    Ok(CrawlResult {
        domain_url: base.to_string(),
        pages,
    })
}

/// One crawl worker: pop, fetch, extract, extend the frontier, repeat
///
/// Exits when the frontier hands out no more work, either because the queue
/// drained or the page budget was reached.
async fn worker_loop(
    client: Client,
    frontier: Arc<Frontier>,
    policy: Arc<CrawlPolicy>,
    max_depth: u32,
) {
    while let Some(entry) = frontier.next_job() {
        // Robots rules cannot change mid-run, but re-checking a dequeued job
        // is cheap and keeps seeds honest too.
        if !policy.allows(&entry.url) {
            tracing::debug!("Skipping disallowed URL {}", entry.url);
            continue;
        }

        let fetched = match fetch_page(&client, &entry.url).await {
            Ok(f) => f,
            Err(e) => {
                tracing::debug!("Fetch failed: {}", e);
                continue;
            }
        };
        if !fetched.is_success() {
            tracing::debug!("Skipping {} (status {})", entry.url, fetched.status);
            continue;
        }

        let parsed = parse_page(&entry.url, &fetched.body);
        frontier.record_page(parsed.record);

        // Entries at max depth are fetched but spawn no children.
        if entry.depth < max_depth {
            frontier.admit(&policy, parsed.links, entry.depth + 1);
        }
    }
}

/// Deduplicates by URL (keeping the first occurrence) and truncates
fn assemble_pages(pages: Vec<PageRecord>, max_pages: usize) -> Vec<PageRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<PageRecord> = pages
        .into_iter()
        .filter(|page| seen.insert(page.url.clone()))
        .collect();
    unique.truncate(max_pages);
    unique
}
