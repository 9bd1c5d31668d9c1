//! Best-image selection.
//!
//! # Module Structure
//!
//! - `guesser`: Tiered search for the image that represents the article
//! - `prober`: Size probes and downloads behind a trait
//! - `store`: Temp files for downloaded images
//! - `dimensions`: Format and pixel size sniffing from image headers

pub mod dimensions;
pub mod guesser;
pub mod prober;
pub mod store;

use std::path::PathBuf;

use serde::Serialize;

pub use dimensions::{image_dimensions, ImageFormat};
pub use guesser::{is_banner_dimensions, is_ok_image_file_name, BestImageGuesser};
pub use prober::{HttpImageProber, ImageProber};
pub use store::{StoredImage, TempImageStore};

/// Which tier of the search produced the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtractionType {
    /// A container id or class known to hold the lead image.
    Known,
    /// The highest-scoring large image near the content root.
    BigImage,
    /// `<link rel="image_src">`.
    LinkTag,
    /// `<meta property="og:image">`.
    OpenGraph,
}

impl ImageExtractionType {
    /// Name used in serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Known => "known",
            Self::BigImage => "bigimage",
            Self::LinkTag => "linktag",
            Self::OpenGraph => "opengraph",
        }
    }
}

/// The chosen article image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    /// Absolute image URL.
    pub src: String,
    /// Tier that found it.
    pub extraction_type: ImageExtractionType,
    /// 0-100; lower when several images competed.
    pub confidence_score: f64,
    /// Byte size, `0` when unknown.
    pub bytes: u64,
    /// Pixel width, `0` when the image was not downloaded.
    pub width: u32,
    /// Pixel height, `0` when the image was not downloaded.
    pub height: u32,
}

/// An `<img>` that survived filtering and was downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate {
    /// Absolute source URL.
    pub src: String,
    /// Downloaded size.
    pub bytes: u64,
    pub width: u32,
    pub height: u32,
    /// Sequence and area score.
    pub score: f64,
    /// Where the download was stored.
    pub temp_path: PathBuf,
}
