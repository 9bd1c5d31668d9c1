//! HTML Meta Tag Extraction
//!
//! Description, keywords, canonical link and article tags, plus the date
//! parsing shared by the publish-date extractor.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use dom_query::Document;
use url::Url;

use crate::dom;
use crate::patterns::TAG_LINK_SELECTOR;

/// Trimmed `content` of the first element matching `selector`, or empty.
#[must_use]
pub fn meta_content(doc: &Document, selector: &str) -> String {
    dom::select_document(doc, selector)
        .first()
        .and_then(|node| dom::attr(node, "content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// `<meta name="description">` content.
#[must_use]
pub fn meta_description(doc: &Document) -> String {
    meta_content(doc, "meta[name=description]")
}

/// `<meta name="keywords">` content.
#[must_use]
pub fn meta_keywords(doc: &Document) -> String {
    meta_content(doc, "meta[name=keywords]")
}

/// The page's canonical link, falling back to the crawl URL.
///
/// Relative hrefs are resolved against the crawl URL. An empty href counts
/// as missing.
#[must_use]
pub fn canonical_link(doc: &Document, crawl_url: &Url) -> String {
    let href = dom::select_document(doc, "link[rel=canonical]")
        .first()
        .and_then(|node| dom::attr(node, "href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty());

    match href {
        Some(href) => crawl_url
            .join(&href)
            .map_or(href, |resolved| resolved.to_string()),
        None => crawl_url.to_string(),
    }
}

/// Text of every tag link (`rel=tag` or an `/tag/` path), deduplicated.
#[must_use]
pub fn extract_tags(doc: &Document) -> BTreeSet<String> {
    dom::select_document(doc, TAG_LINK_SELECTOR)
        .iter()
        .map(dom::text)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Parse a date string from meta tags or `time` elements.
///
/// Supports RFC 3339, ISO 8601 without zone, and common date-only formats.
#[must_use]
pub fn parse_meta_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];
    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(date_str, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
