// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   img-crawler https://example.com 2
//   img-crawler https://example.com 1 --output out.json --max-links 0
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::crawl::CrawlOptions;
use crate::error::CrawlError;

#[derive(Parser, Debug)]
#[command(
    name = "img-crawler",
    version,
    about = "Crawl a website to a fixed depth and list every image it references",
    long_about = "img-crawler starts at a seed URL, follows links up to MAX_DEPTH hops away \
                  and records every <img> it finds together with the page it was on. \
                  The result is printed as JSON and saved to a file."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com)
    pub seed_url: String,

    /// Maximum crawl depth
    ///
    /// Depth 0 = just the seed page
    /// Depth 1 = seed page + all pages it links to
    /// etc.
    ///
    /// Must be a non-negative integer, anything else is rejected.
    pub max_depth: u32,

    /// File to write the JSON result to
    #[arg(long, short, default_value = "images.json")]
    pub output: PathBuf,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Maximum number of links followed from a single page (0 = no limit)
    #[arg(long, default_value_t = 20)]
    pub max_links: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = 50)]
    pub concurrency: usize,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Cli {
    // Validates the seed URL and returns it in the URL parser's normal form
    // (e.g. "https://example.com" -> "https://example.com/")
    pub fn seed(&self) -> Result<String, CrawlError> {
        let url = Url::parse(&self.seed_url).map_err(|e| {
            CrawlError::Configuration(format!("invalid seed URL '{}': {}", self.seed_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CrawlError::Configuration(format!(
                "seed URL must use http or https, got '{}'",
                self.seed_url
            )));
        }

        Ok(url.to_string())
    }

    pub fn crawl_options(&self) -> CrawlOptions {
        let mut options = CrawlOptions::default()
            .with_max_depth(self.max_depth)
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_max_links(self.max_links)
            .with_concurrency(self.concurrency);

        if let Some(user_agent) = &self.user_agent {
            options = options.with_user_agent(user_agent.clone());
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_args() {
        let cli = Cli::try_parse_from(["img-crawler", "https://example.com", "2"]).unwrap();
        assert_eq!(cli.seed_url, "https://example.com");
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.output, PathBuf::from("images.json"));

        let options = cli.crawl_options();
        assert_eq!(options.max_depth, 2);
        assert_eq!(options.timeout, Duration::from_millis(1000));
        assert_eq!(options.max_links, Some(20));
        assert_eq!(options.concurrency, 50);
    }

    #[test]
    fn test_seed_is_normalized() {
        let cli = Cli::try_parse_from(["img-crawler", "https://Example.com", "1"]).unwrap();
        assert_eq!(cli.seed().unwrap(), "https://example.com/");
    }

    #[test]
    fn test_bad_seed_is_configuration_error() {
        for seed in ["not a url", "ftp://example.com/file", "/relative/path"] {
            let cli = Cli::try_parse_from(["img-crawler", seed, "1"]).unwrap();
            assert!(matches!(cli.seed(), Err(CrawlError::Configuration(_))), "{}", seed);
        }
    }

    #[test]
    fn test_missing_depth_is_an_error() {
        assert!(Cli::try_parse_from(["img-crawler", "https://example.com"]).is_err());
    }

    #[test]
    fn test_invalid_depth_is_an_error() {
        assert!(Cli::try_parse_from(["img-crawler", "https://example.com", "two"]).is_err());
        assert!(Cli::try_parse_from(["img-crawler", "https://example.com", "--", "-1"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "img-crawler",
            "https://example.com",
            "0",
            "--output",
            "out.json",
            "--timeout-ms",
            "250",
            "--max-links",
            "0",
            "--concurrency",
            "4",
            "--user-agent",
            "bot/1.0",
        ])
        .unwrap();

        let options = cli.crawl_options();
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert_eq!(options.max_links, None);
        assert_eq!(options.concurrency, 4);
        assert_eq!(options.user_agent, "bot/1.0");
    }
}
