// src/crawl/options.rs
// =============================================================================
// Knobs for a crawl run.
//
// Defaults:
// - timeout: 1000 ms per request
// - max_links: 20 links followed per page
// - concurrency: 50 fetches in flight at once
// =============================================================================

use std::time::Duration;

use crate::error::{CrawlError, Result};

#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Pages deeper than this are never fetched. The seed is depth 0.
    pub max_depth: u32,
    /// Per-request timeout
    pub timeout: Duration,
    /// How many links to follow from one page, None = all of them
    pub max_links: Option<usize>,
    /// Upper bound on fetches in flight at the same time
    pub concurrency: usize,
    pub user_agent: String,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 1,
            timeout: Duration::from_millis(1000),
            max_links: Some(20),
            concurrency: 50,
            user_agent: concat!("img-crawler/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlOptions {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    // 0 means "no cap"
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = if max_links == 0 { None } else { Some(max_links) };
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(CrawlError::Configuration(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(CrawlError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CrawlOptions::default();
        assert_eq!(options.timeout, Duration::from_millis(1000));
        assert_eq!(options.max_links, Some(20));
        assert!(options.user_agent.starts_with("img-crawler/"));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_max_links_means_unlimited() {
        let options = CrawlOptions::default().with_max_links(0);
        assert_eq!(options.max_links, None);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = CrawlOptions::default().with_concurrency(0).validate().unwrap_err();
        assert!(matches!(err, CrawlError::Configuration(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = CrawlOptions::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CrawlError::Configuration(_)));
    }
}
