// src/crawl/engine.rs
// =============================================================================
// The recursive crawler.
//
// How one task runs:
// 1. Skip if the page is too deep, the URL is empty, or the URL was seen
// 2. Claim the URL in the visited set (before any request goes out)
// 3. Fetch the page, bail out of this branch on failure
// 4. Extract links and images, store the images
// 5. Start one child task per link at depth + 1 and wait for all of them
//
// The whole tree of tasks is one future: children are joined with join_all
// instead of being spawned, so they overlap only while waiting on the
// network. A semaphore caps how many fetches are in flight at once.
// =============================================================================

use futures::future::{self, BoxFuture, FutureExt};
use tokio::sync::Semaphore;

use super::aggregator::ImageAggregator;
use super::events::{CrawlEvent, EventSender, SkipReason};
use super::options::CrawlOptions;
use super::visited::VisitedSet;
use crate::error::{FetchError, Result};
use crate::scrape::{origin_of, parse_page, Fetcher, ImageRecord};

// How a single task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Page fetched, images stored, all children finished
    Done,
    /// Fetch or parse failed, nothing stored
    Failed,
    /// Never fetched
    Skipped,
}

// One crawl run
//
// The visited set and the image sink live here and are shared by reference
// with every task of the run.
pub struct Crawler {
    options: CrawlOptions,
    fetcher: Fetcher,
    visited: VisitedSet,
    images: ImageAggregator,
    fetch_permits: Semaphore,
    events: Option<EventSender>,
}

impl Crawler {
    pub fn new(options: CrawlOptions) -> Result<Self> {
        options.validate()?;
        let fetcher = Fetcher::new(options.timeout, &options.user_agent)?;

        Ok(Self {
            fetch_permits: Semaphore::new(options.concurrency),
            options,
            fetcher,
            visited: VisitedSet::new(),
            images: ImageAggregator::new(),
            events: None,
        })
    }

    // Sends a CrawlEvent for every finished task to `events`
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    // Crawls from `seed` (depth 0) and returns once every branch has ended
    pub async fn crawl(&self, seed: &str) -> TaskOutcome {
        self.visit(seed.to_string(), 0).await
    }

    // Everything collected so far. Meant to be called after crawl() returns.
    pub async fn images(&self) -> Vec<ImageRecord> {
        self.images.snapshot().await
    }

    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }

    // Async fns can't call themselves directly (the future type would be
    // infinitely sized), so the recursion goes through a boxed future.
    fn visit(&self, url: String, depth: u32) -> BoxFuture<'_, TaskOutcome> {
        async move {
            if let Err(reason) = self.claim(&url, depth) {
                self.emit(CrawlEvent::Skipped { url, depth, reason });
                return TaskOutcome::Skipped;
            }

            self.emit(CrawlEvent::Visiting { url: url.clone(), depth });

            let links = match self.process(&url, depth).await {
                Ok(links) => links,
                Err(e) => {
                    self.emit(CrawlEvent::Failed { url, depth, cause: e.to_string() });
                    return TaskOutcome::Failed;
                }
            };

            if depth < self.options.max_depth && !links.is_empty() {
                let children = links.into_iter().map(|link| self.visit(link, depth + 1));
                future::join_all(children).await;
            }

            TaskOutcome::Done
        }
        .boxed()
    }

    // Skip check plus visited-set insert. On Ok the caller owns the URL for
    // this run and must fetch it.
    fn claim(&self, url: &str, depth: u32) -> std::result::Result<(), SkipReason> {
        if depth > self.options.max_depth {
            return Err(SkipReason::TooDeep);
        }
        if url.is_empty() {
            return Err(SkipReason::EmptyUrl);
        }
        if !self.visited.try_claim(url) {
            return Err(SkipReason::AlreadyVisited);
        }
        Ok(())
    }

    // Fetch, parse and store one page. Returns the links to follow.
    async fn process(&self, url: &str, depth: u32) -> Result<Vec<String>> {
        let body = {
            let _permit = self
                .fetch_permits
                .acquire()
                .await
                .map_err(|_| FetchError::Request("fetch pool closed".to_string()))?;
            self.fetcher.fetch(url).await?
        };

        let origin = origin_of(url)?;
        let page = parse_page(&body, url, &origin, depth, self.options.max_links);

        self.emit(CrawlEvent::Fetched {
            url: url.to_string(),
            depth,
            images: page.images.len(),
            links: page.links.len(),
        });

        self.images.append(page.images).await;
        Ok(page.links)
    }

    fn emit(&self, event: CrawlEvent) {
        if let Some(events) = &self.events {
            // A closed receiver just means nobody is listening anymore
            let _ = events.send(event);
        }
    }
}
