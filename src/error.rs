//! Error types for rs-goose.
//!
//! Fetch and parse failures abort an extraction and surface here. Missing
//! content or a missing image are not failures: `NoContent` and
//! `ImageUnavailable` only ever appear as rendered warnings on the article.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL to extract could not be parsed as an absolute URL.
    #[error("Invalid URL passed in: {0}")]
    InvalidUrl(String),

    /// HTML parsing failed (empty or unusable input).
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// The fetched payload exceeded the configured byte ceiling.
    #[error("Content exceeded the maximum of {max_bytes} bytes")]
    ContentTooLarge {
        /// Configured ceiling.
        max_bytes: u64,
    },

    /// The response did not look like HTML or XML.
    #[error("URL {0} did not contain valid HTML")]
    NotHtml(String),

    /// Transport-level HTTP failure while fetching the page.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The caller cancelled the extraction.
    #[error("Extraction cancelled")]
    Cancelled,

    /// Content scoring produced no candidate nodes.
    #[error("No extractable content found")]
    NoContent,

    /// All image tiers were exhausted without a match.
    #[error("No suitable image found")]
    ImageUnavailable,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
