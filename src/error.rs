// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Two levels:
// - FetchError: why a single HTTP GET did not produce a usable page
// - CrawlError: everything else that can go wrong during a run
//
// Branch errors (MalformedUrl, Fetch) only end the branch that hit them.
// Configuration errors abort the run before any request is made.
// Persistence errors are reported but the crawl result is still printed.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a page could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Request(String),
}

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("could not write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn malformed(url: &str, reason: impl ToString) -> Self {
        CrawlError::MalformedUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
