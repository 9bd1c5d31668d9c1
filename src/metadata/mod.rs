//! Metadata extraction module.
//!
//! Everything about the page that is not the article body: title, meta
//! description and keywords, canonical link, tag links, publish date and
//! caller-defined additional data.

pub mod extractors;
pub mod meta_tags;
pub mod title;

pub use extractors::{
    AdditionalDataExtractor, MetaPublishDateExtractor, NoAdditionalData, PublishDateExtractor,
};
pub use meta_tags::{
    canonical_link, extract_tags, meta_content, meta_description, meta_keywords, parse_meta_date,
};
pub use title::extract_title;
