//! Pluggable extractors that run on the raw document before cleaning.
//!
//! Callers can swap these through [`Configuration`](crate::Configuration) to
//! pull site-specific data out of the page while it is still intact.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dom_query::Document;

use crate::dom;
use crate::metadata::meta_tags::parse_meta_date;

/// Sources of a publish date, in priority order: (selector, attribute).
const PUBLISH_DATE_SOURCES: [(&str, &str); 7] = [
    ("meta[property='article:published_time']", "content"),
    ("meta[itemprop='datePublished']", "content"),
    ("meta[name='pubdate']", "content"),
    ("meta[name='publishdate']", "content"),
    ("meta[name='date']", "content"),
    ("meta[name='DC.date.issued']", "content"),
    ("time[datetime]", "datetime"),
];

/// Finds the article's publish date.
pub trait PublishDateExtractor: Send + Sync {
    /// Publish date, if the page declares one.
    fn extract(&self, doc: &Document) -> Option<DateTime<Utc>>;
}

/// Reads `article:published_time` and similar meta tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaPublishDateExtractor;

impl PublishDateExtractor for MetaPublishDateExtractor {
    fn extract(&self, doc: &Document) -> Option<DateTime<Utc>> {
        PUBLISH_DATE_SOURCES.iter().find_map(|(selector, attribute)| {
            dom::select_document(doc, selector)
                .iter()
                .filter_map(|node| dom::attr(node, attribute))
                .find_map(|value| parse_meta_date(&value))
        })
    }
}

/// Pulls arbitrary key/value data out of the page.
pub trait AdditionalDataExtractor: Send + Sync {
    /// Extracted data; empty when there is nothing to report.
    fn extract(&self, doc: &Document) -> HashMap<String, String>;
}

/// Extracts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdditionalData;

impl AdditionalDataExtractor for NoAdditionalData {
    fn extract(&self, _doc: &Document) -> HashMap<String, String> {
        HashMap::new()
    }
}
