//! URL Utility Functions
//!
//! Crawl URL normalization, image source resolution, domain extraction and
//! the link hash used to name temporary image files.

use url::Url;

use crate::error::{Error, Result};

/// Rewrite `#!` AJAX URLs to their crawlable `_escaped_fragment_` form.
#[must_use]
pub fn escape_fragment_url(url: &str) -> String {
    url.replace("#!", "?_escaped_fragment_=")
}

/// Parse the URL to crawl after fragment rewriting.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when the result is not an absolute URL.
pub fn parse_crawl_url(url: &str) -> Result<Url> {
    let rewritten = escape_fragment_url(url.trim());
    Url::parse(&rewritten).map_err(|_| Error::InvalidUrl(rewritten))
}

/// Resolve an image `src` against the page URL.
///
/// Spaces are encoded as `%20`. When resolution fails the encoded `src` is
/// returned as is.
#[must_use]
pub fn build_image_path(base: &Url, src: &str) -> String {
    let encoded = src.trim().replace(' ', "%20");
    base.join(&encoded).map_or(encoded, |resolved| resolved.to_string())
}

/// Host of a URL, or an empty string when it has none or does not parse.
#[must_use]
pub fn domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// SHA-1 hex digest of a URL.
///
/// Every temp file written while extracting that URL starts with this hash,
/// which is how they are found again for cleanup.
#[must_use]
pub fn link_hash(url: &str) -> String {
    sha1_smol::Sha1::from(url).digest().to_string()
}
