// src/scrape/http.rs
// =============================================================================
// This module downloads pages.
//
// Key functionality:
// - One GET per URL, no retries
// - A fixed per-request timeout
// - Only an exact 200 with a readable body counts as success
// - Failures are sorted into FetchError variants (timeout, status, ...)
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{CrawlError, FetchError};

// A reusable HTTP client for page downloads
//
// Client is cheap to clone (it's a reference counter internally), so the
// crawler keeps one Fetcher and shares it with every task.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Creates a fetcher with the given per-request timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| CrawlError::Configuration(format!("could not build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    // Fetches a page and returns its body
    //
    // Returns:
    //   Ok(body) on HTTP 200
    //   Err(FetchError) on any other status, transport error or timeout
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}

// Categorizes errors from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure or refused connection
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}
