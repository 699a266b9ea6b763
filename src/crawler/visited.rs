//! Concurrency-safe set of URLs already scheduled in a crawl run

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// URLs claimed during one crawl run
///
/// URLs are compared as opaque strings. A URL is never removed once claimed,
/// and there is deliberately no read-only membership query: the only way to
/// observe the set is to claim.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url` for this run
    ///
    /// Returns `true` exactly once per distinct URL string, for the first
    /// caller; every later call for the same string returns `false`. The
    /// check and the insert happen under one lock acquisition.
    pub fn try_claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock().unwrap_or_else(PoisonError::into_inner);
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Number of URLs claimed so far
    pub fn len(&self) -> usize {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
