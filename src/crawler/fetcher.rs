//! HTTP fetcher
//!
//! Builds the crawl HTTP client and performs single bounded-time GETs. There
//! are no retries: one timeout or network error marks the page unfetchable for
//! the run, and the scheduler decides what to do with the returned error value.

use crate::CrawlError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A completed page fetch
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,

    /// Response body
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds the HTTP client used for every request in a crawl
///
/// The client carries the identifying user agent and the hard per-request
/// timeout; redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `user_agent` - Full user agent string, e.g. `GraceCrawler/1.0 (+https://example.com)`
/// * `timeout` - Hard per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// Issues one GET with the client's timeout. The in-flight request is aborted
/// when the timeout elapses and reported as [`CrawlError::Timeout`]. Non-2xx
/// statuses are not errors here; the caller inspects
/// [`FetchedPage::is_success`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The response arrived (any status)
/// * `Err(CrawlError)` - Timeout or network failure
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, CrawlError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(e, url))?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| classify_error(e, url))?;

    Ok(FetchedPage { status, body })
}

fn classify_error(error: reqwest::Error, url: &Url) -> CrawlError {
    if error.is_timeout() {
        CrawlError::Timeout {
            url: url.to_string(),
        }
    } else {
        CrawlError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
