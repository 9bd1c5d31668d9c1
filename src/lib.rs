//! # rs-goose
//!
//! Article extraction from news and blog pages.
//!
//! Given a page URL (and optionally its HTML), this library finds the main
//! article body by scoring paragraphs on their stop-word density, recovers
//! paragraphs that belong to the story but sit outside its container, and
//! picks the image that best represents the article.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_goose::{Configuration, Extractor};
//!
//! let html = r#"<html><head><title>My Article | Example News</title></head>
//! <body><div id="story">
//!   <p>It was the best of times and the worst of times for all of them.</p>
//!   <p>They were on the road to the coast when it started to rain on them.</p>
//! </div></body></html>"#;
//!
//! let extractor = Extractor::new(Configuration {
//!     enable_image_fetching: false,
//!     ..Configuration::default()
//! });
//! let article = extractor.extract("https://example.com/story", Some(html))?;
//! assert_eq!(article.title, "Example News");
//! assert!(article.cleaned_text.contains("best of times"));
//! # Ok::<(), rs_goose::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: download and decode the page unless HTML was supplied
//! 2. **Pre-clean extractors**: publish date, additional data, tags
//! 3. **Clean**: strip scripts, chrome and boilerplate containers
//! 4. **Metadata**: title, meta description and keywords, canonical link
//! 5. **Content root**: stop-word clustering picks the top node
//! 6. **Videos, image, cleanup, text**: in that order, on the top node
//!
//! A page without a content root still yields an [`Article`] with its
//! metadata and a warning. Only fetch, parse and URL errors, and
//! cancellation, fail an extraction.

mod error;
mod options;
mod result;

/// Cooperative cancellation.
pub mod cancel;

/// Document cleaning before scoring.
pub mod cleaner;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Content root selection, cleanup, videos and text output.
pub mod extractor;

/// Best-image search, probing and temp storage.
pub mod images;

/// Link density testing for boilerplate detection.
pub mod link_density;

/// Metadata extraction (title, meta tags, canonical link, tags, dates).
pub mod metadata;

/// Blocking HTTP fetching.
pub mod network;

/// Shared regular expressions and selectors.
pub mod patterns;

/// Per-node score side table.
pub mod scoring;

/// Stop-word sets and counting.
pub mod stopwords;

/// URL utilities for normalization, resolution and hashing.
pub mod url_utils;

use tracing::{debug, info, warn};

use crate::cleaner::{DefaultDocumentCleaner, DocumentCleaner};
use crate::images::{BestImageGuesser, HttpImageProber, ImageProber, TempImageStore};
use crate::network::HtmlFetcher;
use crate::scoring::NodeScores;

// Public API - re-exports
pub use cancel::CancellationToken;
pub use error::{Error, Result};
pub use images::{Image, ImageExtractionType};
pub use options::{Configuration, DEFAULT_MIN_BYTES_FOR_IMAGES};
pub use result::Article;
pub use stopwords::{StopWords, WordStats};

/// Runs the extraction pipeline with one configuration.
///
/// The cleaner and the image prober can be replaced, which is how tests run
/// the image search without a network.
pub struct Extractor {
    config: Configuration,
    cleaner: Box<dyn DocumentCleaner>,
    prober: Box<dyn ImageProber>,
    fetcher: HtmlFetcher,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Extractor {
    /// Create an extractor with the default cleaner and an HTTP prober.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            cleaner: Box::new(DefaultDocumentCleaner),
            prober: Box::new(HttpImageProber::new(config.client.clone())),
            fetcher: HtmlFetcher::new(config.client.clone()),
            config,
        }
    }

    /// Replace the image prober.
    #[must_use]
    pub fn with_prober(mut self, prober: Box<dyn ImageProber>) -> Self {
        self.prober = prober;
        self
    }

    /// Replace the document cleaner.
    #[must_use]
    pub fn with_cleaner(mut self, cleaner: Box<dyn DocumentCleaner>) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Extract the article at `url`.
    ///
    /// When `raw_html` is `None` the page is fetched first.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidUrl` when `url` is not absolute
    /// - `Error::Http`, `Error::ContentTooLarge`, `Error::NotHtml` from fetching
    /// - `Error::Parse` for empty or markup-free HTML
    pub fn extract(&self, url: &str, raw_html: Option<&str>) -> Result<Article> {
        self.extract_with_cancel(url, raw_html, &CancellationToken::new())
    }

    /// Like [`extract`](Self::extract), stopping at the next checkpoint once
    /// `cancel` is cancelled.
    ///
    /// # Errors
    ///
    /// As [`extract`](Self::extract), plus `Error::Cancelled`.
    pub fn extract_with_cancel(
        &self,
        url: &str,
        raw_html: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Article> {
        let page_url = url_utils::parse_crawl_url(url)?;
        let final_url = page_url.to_string();
        let link_hash = url_utils::link_hash(&final_url);

        let fetched;
        let html = match raw_html {
            Some(html) => html,
            None => {
                cancel.check()?;
                fetched = self.fetcher.fetch(&final_url)?;
                fetched.as_str()
            }
        };

        let doc = dom::parse_document(html)?;
        let mut article = Article {
            final_url: final_url.clone(),
            link_hash: link_hash.clone(),
            publish_date: self.config.publish_date_extractor.extract(&doc),
            additional_data: self.config.additional_data_extractor.extract(&doc),
            tags: metadata::extract_tags(&doc),
            ..Article::default()
        };

        self.cleaner.clean(&doc);

        article.title = metadata::extract_title(&doc);
        article.meta_description = metadata::meta_description(&doc);
        article.meta_keywords = metadata::meta_keywords(&doc);
        article.canonical_link = metadata::canonical_link(&doc, &page_url);
        article.domain = url_utils::domain(&article.canonical_link);

        let stop_words = &self.config.stop_words;
        let mut scores = NodeScores::new();
        let Some(top) = extractor::calculate_best_node(&doc, stop_words, &mut scores) else {
            warn!(url = %final_url, "no content root found");
            article.warnings.push(Error::NoContent.to_string());
            return Ok(article);
        };
        debug!(node = %dom::describe(&top), "content root selected");

        // cleanup prunes figures and bare images, so it runs after both
        article.movies = extractor::extract_videos(&top);

        if self.config.enable_image_fetching {
            let store = TempImageStore::new(&self.config.cache_dir, self.config.min_bytes_for_images);
            let guesser = BestImageGuesser::new(
                self.prober.as_ref(),
                &store,
                &page_url,
                self.config.min_bytes_for_images,
                cancel,
            );
            let image = guesser.best_image(&doc, &top);
            store.release_resources(&link_hash);

            match image? {
                Some(image) => article.top_image = Some(image),
                None => {
                    debug!(url = %final_url, "no image found");
                    article.warnings.push(Error::ImageUnavailable.to_string());
                }
            }
        }

        extractor::cleanup_node(&top, stop_words, &scores);
        article.cleaned_text = extractor::formatted_text(&top, stop_words, &scores);
        article.content_html = Some(dom::outer_html(&top));

        info!(
            url = %final_url,
            chars = article.cleaned_text.chars().count(),
            image = article.top_image.is_some(),
            "article extracted"
        );
        Ok(article)
    }
}

/// Extract the article at `url` with the default configuration.
///
/// Images are searched over the network. Use an [`Extractor`] to change
/// that or any other setting.
///
/// ```rust,no_run
/// let article = rs_goose::extract("https://example.com/news/story.html", None)?;
/// println!("{}", article.cleaned_text);
/// # Ok::<(), rs_goose::Error>(())
/// ```
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract(url: &str, raw_html: Option<&str>) -> Result<Article> {
    Extractor::default().extract(url, raw_html)
}
