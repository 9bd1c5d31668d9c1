//! Result type for article extraction.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::images::Image;

/// An extracted article.
///
/// Fields the page did not provide are left empty rather than failing the
/// extraction. Problems that did not abort extraction are listed in
/// `warnings`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Article {
    /// The URL that was extracted, after `#!` rewriting.
    pub final_url: String,

    /// Host of the canonical link.
    pub domain: String,

    /// Cleaned `<title>` text.
    pub title: String,

    /// `<meta name="description">` content.
    pub meta_description: String,

    /// `<meta name="keywords">` content.
    pub meta_keywords: String,

    /// `<link rel="canonical">` target, or the final URL.
    pub canonical_link: String,

    /// Texts of tag links (`rel="tag"` or `/tag/` paths).
    pub tags: BTreeSet<String>,

    /// Publish date from the configured extractor.
    pub publish_date: Option<DateTime<Utc>>,

    /// Output of the configured additional-data extractor.
    pub additional_data: HashMap<String, String>,

    /// HTML of the cleaned content root; `None` when no content was found.
    pub content_html: Option<String>,

    /// Article body as plain text, paragraphs separated by blank lines.
    pub cleaned_text: String,

    /// Best image for the article.
    pub top_image: Option<Image>,

    /// Outer HTML of embedded YouTube and Vimeo players.
    pub movies: Vec<String>,

    /// Non-fatal issues encountered during extraction.
    pub warnings: Vec<String>,

    /// SHA-1 of the final URL; prefixes this article's temp image files.
    pub link_hash: String,
}

impl Article {
    /// Whether a content root was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content_html.is_some()
    }
}
