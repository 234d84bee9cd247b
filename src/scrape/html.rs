// src/scrape/html.rs
// =============================================================================
// This module pulls links and images out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Links are resolved to absolute URLs (see url.rs) and deduplicated.
// Images are recorded exactly as written in the page's src attribute.
// =============================================================================

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::url::resolve;

// One image found while crawling
//
// Serialized as {"imageUrl": ..., "sourceUrl": ..., "depth": ...}
// An <img> without src has no "imageUrl" key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// The raw src attribute, possibly relative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The absolute URL of the page the image was found on
    pub source_url: String,
    /// How many link hops from the seed page
    pub depth: u32,
}

// Everything the crawler needs from one page
#[derive(Debug, Default)]
pub struct PageContent {
    pub links: Vec<String>,
    pub images: Vec<ImageRecord>,
}

// Parses a page body and extracts its links and images in one pass over the
// same document
//
// Parameters:
//   html: raw page body
//   source_url: the absolute URL the body was fetched from
//   origin: origin of source_url, used to resolve relative hrefs
//   depth: crawl depth of this page
//   max_links: optional cap on how many links to keep
pub fn parse_page(
    html: &str,
    source_url: &str,
    origin: &str,
    depth: u32,
    max_links: Option<usize>,
) -> PageContent {
    let document = Html::parse_document(html);

    PageContent {
        links: extract_links(&document, origin, max_links),
        images: extract_images(&document, source_url, depth),
    }
}

// Returns the absolute URLs of every <a href> on the page
//
// Order follows the document, duplicates keep their first occurrence.
// Example:
//   <a href="/a"></a> <a href="mailto:x@y"></a> <a href="/a"></a>
//   origin = "https://example.com"
//   result = ["https://example.com/a"]
pub fn extract_links(document: &Html, origin: &str, max_links: Option<usize>) -> Vec<String> {
    // Constant selector, known to be valid
    let selector = Selector::parse("a").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute_url) = resolve(href, origin) {
            if seen.insert(absolute_url.clone()) {
                links.push(absolute_url);
            }
        }
    }

    if let Some(max) = max_links {
        links.truncate(max);
    }

    links
}

// Returns one ImageRecord per <img> in document order
pub fn extract_images(document: &Html, source_url: &str, depth: u32) -> Vec<ImageRecord> {
    let selector = Selector::parse("img").unwrap();

    document
        .select(&selector)
        .map(|element| ImageRecord {
            image_url: element.value().attr("src").map(str::to_string),
            source_url: source_url.to_string(),
            depth,
        })
        .collect()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is Html never kept around?
//    - scraper::Html is not Send, so it cannot live across an .await in a
//      future that tokio might move between threads
//    - parse_page turns it into plain Strings before returning
//
// 2. What happens to an <img> without src?
//    - It still gets a record, with image_url = None
//    - Lazy-loaded images (data-src=...) show up this way
// -----------------------------------------------------------------------------
