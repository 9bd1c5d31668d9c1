//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rs_goose::images::ImageProber;
use rs_goose::{Configuration, Extractor};

pub const PAGE_URL: &str = "https://example.com/news/2024/storm.html";

/// Story paragraphs, each carrying plenty of stop words.
pub const STORY: [&str; 5] = [
    "The storm moved up the coast during the night and by the morning it had reached the harbour.",
    "Most of the boats that were left in the water were thrown against the pier before the crews could reach them.",
    "By the afternoon the wind had dropped and people came down to the front to see what was left of it.",
    "The council said that it would be weeks before all of the roads along the bay were open again.",
    "There was still no power in most of the town when the sun went down on the second day.",
];

/// A PNG header declaring `width` x `height`, padded to `len` bytes.
pub fn png(width: u32, height: u32, len: usize) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.resize(len.max(data.len()), 0);
    data
}

/// Offline prober with canned answers and a shared log of probed URLs.
#[derive(Default, Clone)]
pub struct MockProber {
    pub sizes: HashMap<String, u64>,
    pub bodies: HashMap<String, Vec<u8>>,
    pub probed: Rc<RefCell<Vec<String>>>,
}

impl MockProber {
    /// Serve a 5000-byte PNG of the given size at `path` on the test host.
    pub fn with_png(mut self, path: &str, width: u32, height: u32) -> Self {
        self.bodies.insert(absolute(path), png(width, height, 5000));
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl ImageProber for MockProber {
    fn head_bytes(&self, url: &str) -> u64 {
        self.probed.borrow_mut().push(url.to_string());
        self.sizes.get(url).copied().unwrap_or(0)
    }

    fn download(&self, url: &str) -> Option<Vec<u8>> {
        self.bodies.get(url).cloned()
    }
}

pub fn absolute(path: &str) -> String {
    format!("https://example.com{path}")
}

/// Extractor writing temp images under `cache_dir` and probing through `prober`.
pub fn extractor(cache_dir: &std::path::Path, prober: &MockProber) -> Extractor {
    Extractor::new(Configuration {
        cache_dir: cache_dir.to_path_buf(),
        ..Configuration::default()
    })
    .with_prober(Box::new(prober.clone()))
}

/// Extractor that never touches images.
pub fn text_only_extractor() -> Extractor {
    Extractor::new(Configuration {
        enable_image_fetching: false,
        ..Configuration::default()
    })
}

/// A news page: `head` extras, then `story_extra` inside the story container.
pub fn news_page(head: &str, story_extra: &str) -> String {
    page(head, "", story_extra)
}

/// A news page with `lead` in a media block just before the story.
pub fn news_page_with_lead(head: &str, lead: &str) -> String {
    page(head, &format!(r#"<div id="lead-media">{lead}</div>"#), "")
}

fn page(head: &str, before_story: &str, story_extra: &str) -> String {
    let paragraphs: String = STORY.iter().map(|p| format!("<p>{p}</p>\n")).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Storm hits the coast | Example News</title>
{head}
</head>
<body>
<nav><a href="/">Home</a> <a href="/world">World</a></nav>
{before_story}
<div id="story">
{story_extra}
{paragraphs}
</div>
<div id="more">
<ul>
<li><a href="/a">Ferry services cancelled</a></li>
<li><a href="/b">Schools closed for the week</a></li>
<li><a href="/c">Photos of the flooding</a></li>
</ul>
</div>
</body>
</html>"#
    )
}
