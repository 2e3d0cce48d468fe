//! Sitemap discovery and flattening
//!
//! Resolves every sitemap the origin advertises into one flat, deduplicated,
//! same-origin page URL list. Candidates come from `Sitemap:` directives in
//! robots.txt plus the conventional `/sitemap.xml` and `/sitemap_index.xml`
//! locations. Index files are followed recursively with a visited set guarding
//! against cycles. A sitemap that cannot be fetched or parsed contributes
//! nothing; resolution itself never fails.

mod parser;

pub use parser::{parse_sitemap, SitemapFile};

use crate::url::same_origin;
use reqwest::{Client, StatusCode};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Conventional sitemap locations probed for every crawl
const WELL_KNOWN_PATHS: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Resolves all sitemap URLs for a crawl base into a flat page URL list
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base` - The normalized crawl base
/// * `declared` - Sitemap URLs declared in robots.txt, as written
///
/// # Returns
///
/// Same-origin page URLs in discovery order, deduplicated.
pub async fn resolve_sitemaps(client: &Client, base: &Url, declared: &[String]) -> Vec<Url> {
    let mut pending: VecDeque<Url> = declared
        .iter()
        .filter_map(|raw| Url::parse(raw).ok())
        .collect();

    for path in WELL_KNOWN_PATHS {
        if let Ok(candidate) = base.join(path) {
            pending.push_back(candidate);
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut pages: Vec<Url> = Vec::new();

    while let Some(sitemap_url) = pending.pop_front() {
        if !visited.insert(sitemap_url.as_str().to_string()) {
            continue;
        }

        let Some(xml) = fetch_sitemap(client, &sitemap_url).await else {
            continue;
        };

        match parse_sitemap(&xml) {
            SitemapFile::Pages(locs) => {
                for loc in locs {
                    let Ok(url) = Url::parse(&loc) else { continue };
                    if !same_origin(&url, base) {
                        continue;
                    }
                    if seen.insert(url.as_str().to_string()) {
                        pages.push(url);
                    }
                }
            }
            SitemapFile::Index(children) => {
                tracing::debug!(
                    "Sitemap index {} lists {} child sitemaps",
                    sitemap_url,
                    children.len()
                );
                for child in children {
                    if let Ok(url) = Url::parse(&child) {
                        pending.push_back(url);
                    }
                }
            }
        }
    }

    tracing::debug!("Resolved {} page URLs from sitemaps", pages.len());
    pages
}

/// Fetches one sitemap document, returning None on any failure
async fn fetch_sitemap(client: &Client, url: &Url) -> Option<String> {
    let response = match client.get(url.clone()).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Failed to fetch sitemap {}: {}", url, e);
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        tracing::debug!("Sitemap {} returned {}", url, response.status());
        return None;
    }

    response.text().await.ok()
}
