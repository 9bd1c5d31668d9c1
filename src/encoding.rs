//! Character encoding detection and transcoding of fetched pages.
//!
//! The charset is taken from the `Content-Type` response header when it names
//! one, then from a byte-order mark, then from a `<meta>` declaration in the
//! first kilobyte. Everything else is treated as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes inspected for a `<meta>` charset declaration.
const META_SCAN_BYTES: usize = 1024;

/// Match `<meta charset="...">` and the `http-equiv` form, which also ends in
/// `charset=...` inside its `content` attribute.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_header(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Encoding declared by a `<meta>` tag near the start of the document.
#[must_use]
pub fn charset_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_BYTES)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Pick the encoding for a response body.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type.and_then(charset_from_header) {
        return encoding;
    }
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }
    charset_from_meta(html).unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing.
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
