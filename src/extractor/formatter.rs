//! Plain-text rendering of the content root.
//!
//! Runs last, after cleanup and image selection. Strips nodes that scoring
//! marked as negative and short blocks that carry no prose, then joins the
//! remaining block texts with blank lines.

use tracing::debug;

use crate::dom::{self, NodeRef};
use crate::scoring::NodeScores;
use crate::stopwords::StopWords;

/// Block elements whose text becomes one output paragraph.
const TEXT_BLOCK_SELECTOR: &str = "p, pre, li, blockquote, h1, h2, h3, h4, h5, h6, td, th, dd, dt";

/// Elements that are dropped when they hold too little prose.
const PRUNABLE_SELECTOR: &str =
    "p, pre, li, blockquote, h1, h2, h3, h4, h5, h6, div, section, article, ul, ol, dl, dd, dt";

/// Fewer stop words than this makes a block prunable.
const MIN_STOP_WORDS: usize = 3;

/// Clean the content root in place and render its text.
pub fn formatted_text(top: &NodeRef, stop_words: &StopWords, scores: &NodeScores) -> String {
    remove_nodes_with_negative_scores(top, scores);
    remove_paragraphs_with_few_words(top, stop_words);
    output_text(top)
}

/// Remove descendants whose content score is below one.
///
/// Unscored nodes are left alone.
pub fn remove_nodes_with_negative_scores(top: &NodeRef, scores: &NodeScores) {
    for node in dom::select_all(top, "*") {
        if scores.is_scored(node.id) && scores.score(node.id) < 1 {
            debug!(score = scores.score(node.id), node = %dom::describe(&node), "removing negative node");
            dom::remove(&node);
        }
    }
}

/// Remove blocks with fewer than three stop words, unless they hold media.
pub fn remove_paragraphs_with_few_words(top: &NodeRef, stop_words: &StopWords) {
    for node in dom::select_all(top, PRUNABLE_SELECTOR) {
        if stop_words.stop_word_count(&node.text()).stop_word_count >= MIN_STOP_WORDS {
            continue;
        }
        if !dom::select_all(&node, "object, embed").is_empty() {
            continue;
        }
        dom::remove(&node);
    }
}

/// Join the innermost block texts with blank lines.
///
/// Falls back to the whole normalized text when the root has no block
/// descendants (a bare `td` or `pre` root).
#[must_use]
pub fn output_text(top: &NodeRef) -> String {
    let blocks: Vec<String> = dom::select_all(top, TEXT_BLOCK_SELECTOR)
        .iter()
        .filter(|node| dom::select_all(node, TEXT_BLOCK_SELECTOR).is_empty())
        .map(dom::text)
        .filter(|text| !text.is_empty())
        .collect();

    if blocks.is_empty() {
        return dom::text(top);
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    const PROSE: &str = "It was the best of times and it was the worst of times.";

    #[test]
    fn test_negative_nodes_are_removed() {
        let html = format!(r#"<div id="top"><div id="bad"><p>{PROSE}</p></div><p id="ok">{PROSE}</p></div>"#);
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        let mut scores = NodeScores::new();
        scores.update_score(doc.select("#bad").nodes()[0].id, -4);
        scores.update_score(doc.select("#ok").nodes()[0].id, 3);

        remove_nodes_with_negative_scores(&top, &scores);
        assert!(doc.select("#bad").is_empty());
        assert_eq!(doc.select("#ok").length(), 1);
    }

    #[test]
    fn test_short_blocks_are_removed_unless_they_hold_media() {
        let html = format!(
            r#"<div id="top">
                <p id="prose">{PROSE}</p>
                <p id="caption">Photo: Reuters</p>
                <div id="video"><embed src="https://www.youtube.com/v/x"></div>
            </div>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        remove_paragraphs_with_few_words(&top, &StopWords::english());

        assert_eq!(doc.select("#prose").length(), 1);
        assert!(doc.select("#caption").is_empty());
        assert_eq!(doc.select("#video").length(), 1);
    }

    #[test]
    fn test_blocks_joined_with_blank_lines() {
        let html = format!(
            r#"<div id="top"><p>{PROSE}</p><ul><li>  first   item </li><li>second item</li></ul><p>   </p></div>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];

        assert_eq!(
            output_text(&top),
            format!("{PROSE}\n\nfirst item\n\nsecond item")
        );
    }

    #[test]
    fn test_innermost_blocks_only() {
        let html = r#"<table><tr><td id="top"><p>one</p><p>two</p></td></tr></table>"#;
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        assert_eq!(output_text(&top), "one\n\ntwo");
    }

    #[test]
    fn test_falls_back_to_whole_text() {
        let doc = Document::from(r#"<table><tr><td id="top">just   a cell</td></tr></table>"#);
        let top = doc.select("#top").nodes()[0];
        assert_eq!(output_text(&top), "just a cell");
    }
}
