// src/scrape/url.rs
// =============================================================================
// URL normalization.
//
// - origin_of: "https://example.com:8443/a/b?c" -> "https://example.com:8443"
// - resolve:   turns an href found on a page into an absolute URL, or None
//              when the link should be dropped
//
// Relative hrefs are resolved against the page's origin, not the full page
// URL, so "img/x.png" on https://example.com/a/b.html becomes
// https://example.com/img/x.png.
// =============================================================================

use crate::error::{CrawlError, Result};
use url::Url;

// Returns scheme + "://" + host, plus ":port" when the URL carries a
// non-default port
pub fn origin_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| CrawlError::malformed(url, e))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| CrawlError::malformed(url, "URL has no host"))?;

    let mut origin = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        origin.push_str(&format!(":{}", port));
    }

    Ok(origin)
}

// Resolves an href against an origin
//
// Returns:
//   None          - empty href, unresolvable href, or an href that resolution
//                   leaves untouched (mailto:, javascript:, tel:, ...)
//   Some(href)    - href already starts with http:// or https://
//   Some(joined)  - href was relative and joined onto the origin
pub fn resolve(href: &str, origin: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }

    if is_absolute(href) {
        return Some(href.to_string());
    }

    let base = Url::parse(origin).ok()?;
    let joined = base.join(href).ok()?.to_string();

    if joined == href {
        None
    } else {
        Some(joined)
    }
}

fn is_absolute(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
