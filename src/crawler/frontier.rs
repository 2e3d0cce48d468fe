//! Crawl frontier
//!
//! Owns the three pieces of state every worker shares: the FIFO queue of
//! discovered-but-unfetched entries, the set of URLs ever admitted, and the
//! collected page records. All three live behind one mutex so the
//! discovered-check plus insert is atomic and a URL can be admitted at most
//! once per run. The lock is never held across an await point.

use crate::crawler::{CrawlPolicy, PageRecord};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use url::Url;

/// One unit of crawl work: a URL and the depth it was discovered at
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub url: Url,
    pub depth: u32,
}

#[derive(Debug, Default)]
struct FrontierState {
    queue: VecDeque<FrontierEntry>,
    discovered: HashSet<String>,
    pages: Vec<PageRecord>,
}

/// Shared crawl frontier, bounded by the run's page budget
#[derive(Debug)]
pub struct Frontier {
    max_pages: usize,
    state: Mutex<FrontierState>,
}

impl Frontier {
    pub fn new(max_pages: usize) -> Self {
        Self {
            max_pages,
            state: Mutex::new(FrontierState::default()),
        }
    }

    /// Seeds the frontier with depth-0 entries
    ///
    /// Seeds are admitted without a policy check; robots rules are enforced
    /// when a worker dequeues them. Duplicates are dropped.
    pub fn seed(&self, urls: impl IntoIterator<Item = Url>) {
        let mut state = self.state.lock().unwrap();
        for url in urls {
            if state.discovered.insert(url.as_str().to_string()) {
                state.queue.push_back(FrontierEntry { url, depth: 0 });
            }
        }
    }

    /// Pops the next job, or None when the worker should exit
    ///
    /// Returns None once the page budget is reached or the queue is empty.
    /// Workers do not block waiting for new entries; this is a
    /// drain-to-completion design.
    pub fn next_job(&self) -> Option<FrontierEntry> {
        let mut state = self.state.lock().unwrap();
        if state.pages.len() >= self.max_pages {
            return None;
        }
        state.queue.pop_front()
    }

    /// Appends a collected page record
    pub fn record_page(&self, page: PageRecord) {
        let mut state = self.state.lock().unwrap();
        state.pages.push(page);
    }

    /// Admits newly discovered links at the given depth
    ///
    /// A candidate is admitted only if the policy allows it, it has never been
    /// admitted before, and there is remaining capacity
    /// (`pages + queue < max_pages`). The capacity gate bounds frontier growth,
    /// not just final output.
    pub fn admit(&self, policy: &CrawlPolicy, links: Vec<Url>, depth: u32) {
        let mut state = self.state.lock().unwrap();
        for link in links {
            if !policy.allows(&link) {
                continue;
            }
            if state.discovered.contains(link.as_str()) {
                continue;
            }
            if state.pages.len() + state.queue.len() >= self.max_pages {
                continue;
            }
            state.discovered.insert(link.as_str().to_string());
            state.queue.push_back(FrontierEntry { url: link, depth });
        }
    }

    /// Number of pages collected so far
    pub fn pages_collected(&self) -> usize {
        self.state.lock().unwrap().pages.len()
    }

    /// Drains the collected pages out of the frontier
    pub fn take_pages(&self) -> Vec<PageRecord> {
        std::mem::take(&mut self.state.lock().unwrap().pages)
    }

    #[cfg(test)]
    fn queue_len(&self) -> usize {
        self.state.lock().unwrap().queue.len()
    }
}
