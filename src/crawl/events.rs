// src/crawl/events.rs
// =============================================================================
// What the crawler reports while it runs.
//
// The engine sends a CrawlEvent for every task it finishes; whoever created
// the channel decides what to do with them (main.rs logs them and counts
// them into CrawlStats). Nothing in the engine prints.
// =============================================================================

use std::fmt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooDeep,
    EmptyUrl,
    AlreadyVisited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// URL claimed, fetch about to start
    Visiting { url: String, depth: u32 },
    /// Page fetched and parsed
    Fetched {
        url: String,
        depth: u32,
        images: usize,
        links: usize,
    },
    /// Fetch or parse failed, the branch ends here
    Failed {
        url: String,
        depth: u32,
        cause: String,
    },
    Skipped {
        url: String,
        depth: u32,
        reason: SkipReason,
    },
}

pub type EventSender = UnboundedSender<CrawlEvent>;

// Totals for the end-of-run summary
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub pages_skipped: usize,
    pub images_found: usize,
}

impl CrawlStats {
    pub fn record(&mut self, event: &CrawlEvent) {
        match event {
            CrawlEvent::Visiting { .. } => {}
            CrawlEvent::Fetched { images, .. } => {
                self.pages_fetched += 1;
                self.images_found += images;
            }
            CrawlEvent::Failed { .. } => self.pages_failed += 1,
            CrawlEvent::Skipped { .. } => self.pages_skipped += 1,
        }
    }
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fetched, {} failed, {} skipped, {} images found",
            self.pages_fetched, self.pages_failed, self.pages_skipped, self.images_found
        )
    }
}

// Drains the channel until every sender is dropped, logging each event
//
// Returns the totals once the crawl is over.
pub async fn log_events(mut rx: UnboundedReceiver<CrawlEvent>) -> CrawlStats {
    let mut stats = CrawlStats::default();

    while let Some(event) = rx.recv().await {
        match &event {
            CrawlEvent::Visiting { url, depth } => {
                tracing::info!(%url, depth, "crawling");
            }
            CrawlEvent::Fetched { url, depth, images, links } => {
                tracing::debug!(%url, depth, images, links, "page parsed");
            }
            CrawlEvent::Failed { url, depth, cause } => {
                tracing::warn!(%url, depth, %cause, "error processing page");
            }
            CrawlEvent::Skipped { url, depth, reason } => {
                tracing::trace!(%url, depth, ?reason, "skipped");
            }
        }
        stats.record(&event);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_log_events_counts_until_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        let consumer = tokio::spawn(log_events(rx));

        tx.send(CrawlEvent::Visiting { url: "https://a/".into(), depth: 0 }).unwrap();
        tx.send(CrawlEvent::Fetched { url: "https://a/".into(), depth: 0, images: 3, links: 2 })
            .unwrap();
        tx.send(CrawlEvent::Failed { url: "https://b/".into(), depth: 1, cause: "HTTP 500".into() })
            .unwrap();
        tx.send(CrawlEvent::Skipped {
            url: "https://a/".into(),
            depth: 1,
            reason: SkipReason::AlreadyVisited,
        })
        .unwrap();
        drop(tx);

        let stats = consumer.await.unwrap();
        assert_eq!(
            stats,
            CrawlStats { pages_fetched: 1, pages_failed: 1, pages_skipped: 1, images_found: 3 }
        );
    }

    #[test]
    fn test_summary_lists_every_total() {
        let stats = CrawlStats { pages_fetched: 4, pages_failed: 1, pages_skipped: 7, images_found: 12 };
        assert_eq!(stats.to_string(), "4 fetched, 1 failed, 7 skipped, 12 images found");
    }
}
