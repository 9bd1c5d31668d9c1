//! Tiered search for the image that best represents an article.
//!
//! 1. **Known containers**: ids or classes that big sites use for the lead image.
//! 2. **Large images**: `<img>` elements around the content root are probed,
//!    downloaded and scored by position and area. The search widens to the
//!    previous siblings, then the parent, up to two levels.
//! 3. **Meta tags**: `link[rel=image_src]`, then `og:image`.
//!
//! Pixel dimensions come from the downloaded bytes, since `width`/`height`
//! attributes are often missing or wrong.

use dom_query::{Document, NodeRef};
use tracing::debug;
use url::Url;

use crate::cancel::CancellationToken;
use crate::dom;
use crate::error::Result;
use crate::images::prober::ImageProber;
use crate::images::store::TempImageStore;
use crate::images::{Image, ImageCandidate, ImageExtractionType};
use crate::patterns::BAD_IMAGE_NAMES;
use crate::url_utils::{build_image_path, link_hash};

/// Containers known to hold the lead image, checked by id then class.
const KNOWN_IMAGE_CONTAINERS: [&str; 3] = ["yn-story-related-media", "cnn_strylccimg300cntr", "big_photo"];

/// Images probed per node.
const MAX_IMAGES_PER_NODE: usize = 30;

/// Probed sizes at or above this are ignored (15 MiB).
const MAX_IMAGE_BYTES: u64 = 15 * 1024 * 1024;

/// Width/height ratio above which an image counts as a banner.
const MAX_ASPECT_RATIO: f64 = 5.0;

/// Images narrower than this are never chosen.
const MIN_WIDTH: u32 = 50;

/// Past the first parent level, images narrower than this are skipped.
const MIN_WIDTH_FAR_FROM_CONTENT: u32 = 300;

/// The large-image search stops after reaching this many parent levels.
const MAX_PARENT_DEPTH: u32 = 2;

const KNOWN_CONFIDENCE: f64 = 90.0;
const META_CONFIDENCE: f64 = 100.0;

/// Whether an image is shaped like an ad banner.
///
/// Square images never are; otherwise the longer side must not exceed five
/// times the shorter one.
#[must_use]
pub fn is_banner_dimensions(width: u32, height: u32) -> bool {
    if width == height {
        return false;
    }
    let (long, short) = if width > height { (width, height) } else { (height, width) };
    f64::from(long) / f64::from(short) > MAX_ASPECT_RATIO
}

/// Whether an `<img>` has a usable, non-furniture `src`.
#[must_use]
pub fn is_ok_image_file_name(image: &NodeRef) -> bool {
    let Some(src) = dom::attr(image, "src").filter(|s| !s.trim().is_empty()) else {
        return false;
    };
    if BAD_IMAGE_NAMES.is_match(&src) {
        debug!(src = %src, "found bad filename for image");
        return false;
    }
    true
}

/// Size-probe filter: unknown sizes pass, known ones must be in range.
fn passes_byte_size_test(bytes: u64, min_bytes: u64) -> bool {
    bytes == 0 || (bytes >= min_bytes && bytes < MAX_IMAGE_BYTES)
}

/// Finds the best image for one page.
///
/// Never mutates the document. Every network call goes through the prober
/// and is preceded by a cancellation check.
pub struct BestImageGuesser<'a> {
    prober: &'a dyn ImageProber,
    store: &'a TempImageStore,
    page_url: &'a Url,
    link_hash: String,
    min_bytes: u64,
    cancel: &'a CancellationToken,
}

impl<'a> BestImageGuesser<'a> {
    /// Create a guesser for the page at `page_url`.
    #[must_use]
    pub fn new(
        prober: &'a dyn ImageProber,
        store: &'a TempImageStore,
        page_url: &'a Url,
        min_bytes: u64,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            prober,
            store,
            page_url,
            link_hash: link_hash(page_url.as_str()),
            min_bytes,
            cancel,
        }
    }

    /// Hash prefix of the temp files this guesser writes.
    #[must_use]
    pub fn link_hash(&self) -> &str {
        &self.link_hash
    }

    /// Run all tiers; the first one that finds an image wins.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the token is cancelled mid-search.
    pub fn best_image(&self, doc: &Document, top: &NodeRef) -> Result<Option<Image>> {
        debug!("looking for the most relevant image");

        if let Some(image) = self.check_for_known_elements(doc)? {
            return Ok(Some(image));
        }
        if let Some(image) = self.check_for_large_images(top)? {
            return Ok(Some(image));
        }
        self.check_for_meta_tag(doc)
    }

    /// Lead image of a known container.
    ///
    /// Each known name is tried by id, then by class. A later name in the
    /// list overrides an earlier match.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` before the size probe if cancelled.
    pub fn check_for_known_elements(&self, doc: &Document) -> Result<Option<Image>> {
        let mut known_src = None;
        // no early exit: the last container in the list that matches wins
        for name in KNOWN_IMAGE_CONTAINERS {
            let container = dom::select_document(doc, &format!("#{name}"))
                .into_iter()
                .next()
                .or_else(|| dom::select_document(doc, &format!(".{name}")).into_iter().next());

            let Some(container) = container else { continue };
            if let Some(src) = dom::select_all(&container, "img")
                .first()
                .and_then(|img| dom::attr(img, "src"))
            {
                debug!(src = %src, container = name, "got known image");
                known_src = Some(src);
            }
        }

        let Some(src) = known_src else {
            debug!("no known images found");
            return Ok(None);
        };

        let src = build_image_path(self.page_url, &src);
        self.cancel.check()?;
        let bytes = self.prober.head_bytes(&src);
        Ok(Some(Image {
            src,
            extraction_type: ImageExtractionType::Known,
            confidence_score: KNOWN_CONFIDENCE,
            bytes,
            width: 0,
            height: 0,
        }))
    }

    /// Search `node` for a large image, widening to previous siblings and
    /// then the parent until two parent levels were searched.
    ///
    /// Temp files of candidates that were not chosen are discarded.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the token is cancelled mid-search.
    pub fn check_for_large_images(&self, node: &NodeRef) -> Result<Option<Image>> {
        let mut current = Some(*node);
        let mut parent_depth = 0_u32;
        let mut sibling_depth = 0_u32;

        while let Some(node) = current {
            self.cancel.check()?;
            debug!(
                parent_depth,
                sibling_depth,
                node = %dom::describe(&node),
                "checking for large images"
            );

            let candidates = self.download_and_score(&node, parent_depth)?;
            if let Some(best) = pick_best(&candidates) {
                debug!(src = %best.src, score = best.score, "high score image");
                for other in candidates.iter().filter(|c| c.temp_path != best.temp_path) {
                    self.store.discard(&other.temp_path);
                }
                return Ok(Some(Image {
                    src: best.src.clone(),
                    extraction_type: ImageExtractionType::BigImage,
                    confidence_score: 100.0 / candidates.len() as f64,
                    bytes: best.bytes,
                    width: best.width,
                    height: best.height,
                }));
            }

            if parent_depth >= MAX_PARENT_DEPTH {
                break;
            }

            current = match dom::previous_element_sibling(&node) {
                Some(sibling) => {
                    sibling_depth += 1;
                    Some(sibling)
                }
                None => {
                    debug!("no more sibling nodes, moving to parent");
                    parent_depth += 1;
                    node.parent()
                }
            };
        }

        debug!(parent_depth, "unable to find a large image");
        Ok(None)
    }

    /// `<link rel="image_src">`, then `<meta property="og:image">`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` before the size probe if cancelled.
    pub fn check_for_meta_tag(&self, doc: &Document) -> Result<Option<Image>> {
        let sources = [
            ("link[rel~=image_src]", "href", ImageExtractionType::LinkTag),
            ("meta[property~='og:image']", "content", ImageExtractionType::OpenGraph),
        ];

        for (selector, attribute, extraction_type) in sources {
            // only the first tag of each kind is considered
            let Some(value) = dom::select_document(doc, selector)
                .first()
                .and_then(|node| dom::attr(node, attribute))
                .filter(|v| !v.trim().is_empty())
            else {
                continue;
            };

            let src = build_image_path(self.page_url, &value);
            self.cancel.check()?;
            let bytes = self.prober.head_bytes(&src);
            debug!(src = %src, kind = extraction_type.as_str(), "meta image found");
            return Ok(Some(Image {
                src,
                extraction_type,
                confidence_score: META_CONFIDENCE,
                bytes,
                width: 0,
                height: 0,
            }));
        }

        debug!("unable to find meta image");
        Ok(None)
    }

    /// Filter, probe, download and score the `<img>` descendants of `node`.
    fn download_and_score(&self, node: &NodeRef, parent_depth: u32) -> Result<Vec<ImageCandidate>> {
        let mut sized = Vec::new();
        let images = dom::select_all(node, "img");
        for image in images
            .iter()
            .filter(|img| is_ok_image_file_name(img))
            .take(MAX_IMAGES_PER_NODE)
        {
            let src = build_image_path(self.page_url, &dom::attr(image, "src").unwrap_or_default());
            self.cancel.check()?;
            let bytes = self.prober.head_bytes(&src);
            if passes_byte_size_test(bytes, self.min_bytes) {
                sized.push(src);
            } else {
                debug!(src = %src, bytes, "image failed the byte size test");
            }
        }

        let mut candidates = Vec::new();
        let mut sequence = 1_u32;
        let mut initial_area = 0_u64;

        for src in sized {
            self.cancel.check()?;
            let Some(data) = self.prober.download(&src) else {
                debug!(src = %src, "unable to download image");
                continue;
            };
            let Some(stored) = self.store.save(&data, &self.link_hash) else {
                debug!(src = %src, "unable to store image locally");
                continue;
            };

            let (width, height) = (stored.width, stored.height);
            let rejection = if parent_depth > 1 && width < MIN_WIDTH_FAR_FROM_CONTENT {
                Some("image too narrow this far from content")
            } else if is_banner_dimensions(width, height) {
                Some("image looks like a banner")
            } else if width < MIN_WIDTH {
                Some("image too small")
            } else {
                None
            };
            if let Some(reason) = rejection {
                debug!(src = %src, width, height, parent_depth, "{reason}");
                self.store.discard(&stored.path);
                continue;
            }

            let area = u64::from(width) * u64::from(height);
            let score = if initial_area == 0 {
                initial_area = area;
                1.0
            } else {
                (1.0 / f64::from(sequence)) * (area as f64 / initial_area as f64)
            };
            debug!(src = %src, area, sequence, score, "scored image");
            sequence += 1;

            candidates.push(ImageCandidate {
                src,
                bytes: stored.bytes,
                width,
                height,
                score,
                temp_path: stored.path,
            });
        }

        Ok(candidates)
    }
}

/// Highest score; the earliest candidate wins ties.
fn pick_best(candidates: &[ImageCandidate]) -> Option<&ImageCandidate> {
    candidates.iter().fold(None, |best: Option<&ImageCandidate>, candidate| match best {
        Some(current) if candidate.score <= current.score => Some(current),
        _ => Some(candidate),
    })
}
