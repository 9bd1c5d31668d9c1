//! Configuration for article extraction.
//!
//! The `Configuration` struct controls what an [`Extractor`](crate::Extractor)
//! does beyond content scoring: whether images are fetched, where their temp
//! files go, how the HTTP client behaves, and which pluggable extractors run
//! on the raw page.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::metadata::{
    AdditionalDataExtractor, MetaPublishDateExtractor, NoAdditionalData, PublishDateExtractor,
};
use crate::network::ClientConfig;
use crate::stopwords::StopWords;

/// Default minimum size of a candidate image (bytes).
pub const DEFAULT_MIN_BYTES_FOR_IMAGES: u64 = 4500;

/// Configuration for article extraction.
///
/// All fields are public. Use `Default::default()` and struct-update syntax
/// to change individual settings.
///
/// # Example
///
/// ```rust
/// use rs_goose::Configuration;
///
/// let config = Configuration {
///     enable_image_fetching: false,
///     ..Configuration::default()
/// };
/// assert_eq!(config.min_bytes_for_images, 4500);
/// ```
#[derive(Clone)]
pub struct Configuration {
    /// Directory for downloaded image temp files.
    ///
    /// Default: `<system temp dir>/rs-goose`
    pub cache_dir: PathBuf,

    /// Search for the best article image.
    ///
    /// When disabled no image requests are made and `Article::top_image`
    /// stays `None`.
    ///
    /// Default: `true`
    pub enable_image_fetching: bool,

    /// Smallest image, in bytes, that can be chosen.
    ///
    /// Default: `4500`
    pub min_bytes_for_images: u64,

    /// HTTP settings shared by the page fetcher and the image prober.
    pub client: ClientConfig,

    /// Stop words used by every scoring stage.
    ///
    /// Default: English
    pub stop_words: StopWords,

    /// Runs on the raw page before cleaning.
    ///
    /// Default: [`MetaPublishDateExtractor`]
    pub publish_date_extractor: Arc<dyn PublishDateExtractor>,

    /// Runs on the raw page before cleaning.
    ///
    /// Default: [`NoAdditionalData`]
    pub additional_data_extractor: Arc<dyn AdditionalDataExtractor>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("cache_dir", &self.cache_dir)
            .field("enable_image_fetching", &self.enable_image_fetching)
            .field("min_bytes_for_images", &self.min_bytes_for_images)
            .field("client", &self.client)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            cache_dir: std::env::temp_dir().join("rs-goose"),
            enable_image_fetching: true,
            min_bytes_for_images: DEFAULT_MIN_BYTES_FOR_IMAGES,
            client: ClientConfig::default(),
            stop_words: StopWords::english(),
            publish_date_extractor: Arc::new(MetaPublishDateExtractor),
            additional_data_extractor: Arc::new(NoAdditionalData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use dom_query::Document;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();

        assert!(config.enable_image_fetching);
        assert_eq!(config.min_bytes_for_images, 4500);
        assert!(config.cache_dir.ends_with("rs-goose"));
        assert_eq!(config.client.timeout, Duration::from_secs(10));
        assert_eq!(config.client.max_bytes, 15 * 1024 * 1024);
        assert!(config.stop_words.contains("the"));
    }

    #[test]
    fn test_custom_extractors() {
        struct Section;
        impl AdditionalDataExtractor for Section {
            fn extract(&self, doc: &Document) -> HashMap<String, String> {
                let mut data = HashMap::new();
                let section = doc.select("meta[name=section]").attr("content");
                if let Some(section) = section {
                    data.insert("section".to_string(), section.to_string());
                }
                data
            }
        }

        let config = Configuration {
            additional_data_extractor: Arc::new(Section),
            ..Configuration::default()
        };
        let doc = Document::from(r#"<html><head><meta name="section" content="sport"></head></html>"#);
        let data = config.additional_data_extractor.extract(&doc);
        assert_eq!(data.get("section").map(String::as_str), Some("sport"));
    }

    #[test]
    fn test_debug_skips_extractors() {
        let rendered = format!("{:?}", Configuration::default());
        assert!(rendered.contains("enable_image_fetching: true"));
        assert!(!rendered.contains("publish_date_extractor"));
    }
}
