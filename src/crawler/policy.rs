//! Frontier admission policy
//!
//! A candidate URL may join the frontier only if it is same-origin with the
//! crawl base and its path does not start with any robots disallow prefix.
//! Robots rules do not change mid-run, so the same check is applied again when
//! a worker dequeues a job.

use crate::robots::RobotsRules;
use crate::url::same_origin;
use url::Url;

/// Admission policy for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlPolicy {
    base: Url,
    rules: RobotsRules,
}

impl CrawlPolicy {
    pub fn new(base: Url, rules: RobotsRules) -> Self {
        Self { base, rules }
    }

    /// The normalized base URL this policy was built for
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Checks whether a URL is allowed into the crawl
    pub fn allows(&self, url: &Url) -> bool {
        same_origin(url, &self.base) && !self.rules.is_disallowed(url.path())
    }
}
