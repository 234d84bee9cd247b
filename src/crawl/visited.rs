// src/crawl/visited.rs
// URLs already handed to the fetcher during one crawl run.

use dashmap::DashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: DashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited. Returns false if it was already there.
    ///
    /// Check and insert happen under the same shard lock, so two tasks that
    /// find the same link at once cannot both get `true`.
    pub fn try_claim(&self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
