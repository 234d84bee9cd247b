// src/scrape/mod.rs
// =============================================================================
// Everything that touches a single page.
//
// Submodules:
// - url: origin extraction and href resolution
// - html: link and image extraction from a page body
// - http: downloads a page body
// =============================================================================

mod html;
mod http;
mod url;

pub use html::{parse_page, ImageRecord};
pub use http::Fetcher;
pub use self::url::origin_of;
