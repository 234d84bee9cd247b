// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first recursive crawl starting from a seed URL
// - Configurable depth limit, per-page link cap and fetch concurrency
// - Every URL is fetched at most once per run
// - A failed page only ends its own branch
//
// Submodules:
// - engine: the recursive crawl itself
// - visited: URLs already claimed in this run
// - aggregator: collected image records
// - events: progress reporting over a channel
// - options: crawl settings
// =============================================================================

mod aggregator;
mod engine;
mod events;
mod options;
mod visited;

pub use engine::Crawler;
pub use events::log_events;
pub use options::CrawlOptions;
