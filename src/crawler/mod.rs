//! Crawler core: fetch, extract, and schedule
//!
//! This module contains the crawl state machine:
//! - HTTP fetching with a hard per-request timeout
//! - HTML metadata and link extraction
//! - Frontier management with capacity-gated admission
//! - A fixed worker pool raced against a whole-crawl deadline

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod policy;

pub use coordinator::run_crawl;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{parse_page, ParsedPage};
pub use policy::CrawlPolicy;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::CrawlError;

/// Hard timeout for a single page fetch
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of concurrent crawl workers
pub const CONCURRENCY: usize = 4;

/// Wall-clock ceiling for the whole worker-pool phase
pub const CRAWL_DEADLINE: Duration = Duration::from_secs(20);

/// Default page-count limit when the caller does not provide one
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Default link-following depth when the caller does not provide one
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Page-count and depth limits for one crawl run
#[derive(Debug, Clone, Copy)]
pub struct CrawlLimits {
    /// Maximum number of pages collected
    pub max_pages: usize,

    /// Maximum link-following depth from the seeds
    pub max_depth: u32,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Extracted headings of a crawled page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    /// Text of the first `<h1>` element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,

    /// Text of every `<h2>` element, in document order
    #[serde(default)]
    pub h2: Vec<String>,
}

/// Metadata record for one successfully fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub headings: Headings,
}

/// The final, deduplicated, length-bounded crawl output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// The normalized base URL the crawl ran against
    pub domain_url: String,

    /// Deduplicated page records, at most `max_pages` of them
    pub pages: Vec<PageRecord>,
}

/// Runs a complete crawl of one origin
///
/// This is the main entry point. It resolves robots rules and sitemaps for the
/// target, walks same-origin links with a fixed worker pool under the crate's
/// page, depth, and wall-clock budgets, and assembles the deduplicated result.
///
/// # Arguments
///
/// * `client` - The shared HTTP client (see [`build_http_client`])
/// * `target` - The crawl target URL as supplied by the caller
/// * `limits` - Page-count and depth limits for this run
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed (possibly cut short by the deadline)
/// * `Err(CrawlError)` - The target URL was unusable
pub async fn crawl(client: &Client, target: &str, limits: CrawlLimits) -> Result<CrawlResult, CrawlError> {
    run_crawl(client, target, limits).await
}
