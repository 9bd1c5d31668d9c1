//! Compiled regex patterns and CSS selectors for content extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Everything that is not a letter, a decimal digit, connector punctuation
/// or whitespace. Stripped before stop-word tokenization, so "don't" becomes
/// "dont" and "end." becomes "end".
pub static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Ll}\p{Lu}\p{Lt}\p{Lo}\p{Nd}\p{Pc}\s]").expect("PUNCTUATION regex")
});

// =============================================================================
// Document Cleaning Patterns
// =============================================================================

/// Matches id/class/name values of containers that never hold article text.
pub static BOILERPLATE_ID_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^side$|combx|retweet|mediaarticlerelated|menucontainer|navbar|comment|popularquestions|contact|\bfoot\b|footer|footnote|cnn_strycaptiontxt|\blinks\b|meta$|shoutbox|sponsor|\btags\b|socialnetworking|cnnstryhghlght|cnn_stryspcvbx|^inset$|pagetools|post-attributes|welcome_form|contenttools2|the_answers|remember-tool-tip|communitypromo|runaroundleft|subscribe|vcard|articleheadings|popup|author-dropdown|socialtools|byline|konafilter|breadcrumbs|^fn$|wp-caption-text)",
    )
    .expect("BOILERPLATE_ID_CLASS regex")
});

// =============================================================================
// Image Patterns
// =============================================================================

/// Image sources that are buttons, trackers or ad furniture.
pub static BAD_IMAGE_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.html|\.gif|\.ico|button|twitter\.jpg|facebook\.jpg|digg\.jpg|digg\.png|delicious\.png|facebook\.png|reddit\.jpg|doubleclick|diggthis|diggThis|adserver|/ads/|ec\.atdmt\.com|mediaplex\.com|adsatt|view\.atdmt",
    )
    .expect("BAD_IMAGE_NAMES regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Candidate text-bearing nodes for content scoring.
pub const TEXT_NODE_SELECTOR: &str = "p, pre, td";

/// Anchors that name an article tag.
pub const TAG_LINK_SELECTOR: &str = "a[rel=tag], a[href*='/tag/']";

/// Elements removed outright by the default cleaner.
pub const CLEAN_SELECTOR: &str =
    "script, style, noscript, iframe, form, button, input, select, textarea, nav, aside, footer, header, svg, canvas, link[rel=stylesheet]";
