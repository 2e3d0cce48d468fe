//! Robots.txt handling
//!
//! Fetches and parses `/robots.txt` for the crawl origin. Resolution fails
//! open: any network failure, non-200 status, or unparseable body yields empty
//! rules, and the crawl proceeds restricted only by its other limits.

mod parser;

pub use parser::{parse_robots, RobotsRules};

use reqwest::{Client, StatusCode};
use url::Url;

/// Fetches and parses robots.txt for the origin of `base`
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base` - The normalized crawl base; only its origin is used
///
/// # Returns
///
/// The parsed rules, or empty rules if the file could not be fetched.
pub async fn fetch_robots(client: &Client, base: &Url) -> RobotsRules {
    let robots_url = match base.join("/robots.txt") {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("Failed to build robots.txt URL for {}: {}", base, e);
            return RobotsRules::default();
        }
    };

    let response = match client.get(robots_url.clone()).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Failed to fetch {}: {}", robots_url, e);
            return RobotsRules::default();
        }
    };

    if response.status() != StatusCode::OK {
        tracing::debug!("robots.txt returned {} for {}", response.status(), robots_url);
        return RobotsRules::default();
    }

    match response.text().await {
        Ok(body) => parse_robots(&body),
        Err(e) => {
            tracing::debug!("Failed to read robots.txt body from {}: {}", robots_url, e);
            RobotsRules::default()
        }
    }
}
