// src/crawl/aggregator.rs
// =============================================================================
// The shared sink for image records.
//
// Every crawl task appends the images of its page in one call, so records of
// a single page stay together and in document order. Appends from different
// branches can interleave in any order.
// =============================================================================

use tokio::sync::Mutex;

use crate::scrape::ImageRecord;

#[derive(Debug, Default)]
pub struct ImageAggregator {
    records: Mutex<Vec<ImageRecord>>,
}

impl ImageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, records: Vec<ImageRecord>) {
        if records.is_empty() {
            return;
        }
        self.records.lock().await.extend(records);
    }

    // Copy of everything collected so far
    pub async fn snapshot(&self) -> Vec<ImageRecord> {
        self.records.lock().await.clone()
    }
}
