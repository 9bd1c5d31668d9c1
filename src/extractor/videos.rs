//! Embedded video detection.

use crate::dom::{self, NodeRef};

/// Video hosts whose embeds are kept.
const VIDEO_HOSTS: [&str; 2] = ["youtube", "vimeo"];

/// Collect `embed` and `object` elements that point at a known video host.
///
/// Searches the whole subtree of the root's parent, since players often sit
/// next to the article body rather than inside it. Embeds come first, then
/// objects, each in document order. Returns their outer HTML.
#[must_use]
pub fn extract_videos(top: &NodeRef) -> Vec<String> {
    let Some(scope) = top.parent() else {
        return Vec::new();
    };

    let mut movies = Vec::new();
    for tag in ["embed", "object"] {
        for candidate in dom::select_all(&scope, tag) {
            let Some(src) = dom::attr(&candidate, "src") else {
                continue;
            };
            if VIDEO_HOSTS.iter().any(|host| src.contains(host)) {
                movies.push(dom::outer_html(&candidate));
            }
        }
    }
    movies
}
