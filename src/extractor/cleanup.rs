//! Content root cleanup.
//!
//! Two passes over the chosen content root:
//!
//! 1. **Sibling recovery** pulls paragraphs that sit before the root (intro
//!    text split off by ad slots or image containers) back into it.
//! 2. **Child pruning** drops direct children that are link-heavy, empty, or
//!    scored far below the root.

use tracing::debug;

use crate::dom::{self, NodeRef};
use crate::link_density::is_high_link_density;
use crate::scoring::NodeScores;
use crate::stopwords::StopWords;

/// Paragraphs shorter than this (in characters) are removed during pruning.
const MIN_PARAGRAPH_CHARS: usize = 25;

/// Children scoring below this share of the root's score are removed.
const CHILD_SCORE_FRACTION: f64 = 0.08;

/// Sibling paragraphs must beat this share of the baseline to be recovered.
const SIBLING_BASELINE_FRACTION: f64 = 0.30;

/// Minimum stop words for a root paragraph to count toward the baseline.
const BASELINE_MIN_STOP_WORDS: usize = 2;

/// Baseline used when the root has no qualifying paragraph.
const DEFAULT_BASELINE: usize = 100_000;

/// Average stop-word count of the good paragraphs under the root.
///
/// A paragraph counts with more than two stop words and low link density.
/// Integer division; without any qualifying paragraph the baseline is high
/// enough that no container sibling can beat it.
#[must_use]
pub fn baseline_score_for_siblings(top: &NodeRef, stop_words: &StopWords) -> usize {
    let (total, count) = dom::select_all(top, "p")
        .iter()
        .filter(|p| !is_high_link_density(p))
        .map(|p| stop_words.stop_word_count(&p.text()).stop_word_count)
        .filter(|&count| count > BASELINE_MIN_STOP_WORDS)
        .fold((0, 0), |(total, count), words| (total + words, count + 1));

    if count == 0 {
        DEFAULT_BASELINE
    } else {
        debug!(baseline = total / count, paragraphs = count, "sibling baseline");
        total / count
    }
}

/// Recover content from the element siblings preceding the root.
///
/// Walks backwards from the nearest previous sibling. A `p` sibling is copied
/// in whole; any other sibling contributes its `p` descendants whose stop
/// words beat 30% of the baseline, rebuilt as fresh paragraphs. Each
/// contribution lands before the root's current first child, so the farthest
/// sibling ends up first.
pub fn add_siblings(top: &NodeRef, stop_words: &StopWords) {
    let baseline = baseline_score_for_siblings(top, stop_words);
    let threshold = baseline as f64 * SIBLING_BASELINE_FRACTION;

    let mut current = dom::previous_element_sibling(top);
    while let Some(sibling) = current {
        current = dom::previous_element_sibling(&sibling);

        if dom::is_tag(&sibling, "p") {
            debug!(node = %dom::describe(&sibling), "adding sibling paragraph");
            dom::prepend_html(top, &dom::outer_html(&sibling));
            continue;
        }

        let mut batch = String::new();
        for para in dom::select_all(&sibling, "p") {
            let text = dom::text(&para);
            let score = stop_words.stop_word_count(&text).stop_word_count;
            if threshold < score as f64 {
                batch.push_str("<p>");
                batch.push_str(&dom::escape_text(&text));
                batch.push_str("</p>");
            }
        }

        if !batch.is_empty() {
            debug!(node = %dom::describe(&sibling), "adding paragraphs from sibling");
            dom::prepend_html(top, &batch);
        }
    }
}

/// Recover siblings, then prune the root's direct children.
///
/// `p` children always stay. Table cells are never removed by the empty or
/// low-score rules so tabular content survives.
pub fn cleanup_node(top: &NodeRef, stop_words: &StopWords, scores: &NodeScores) {
    add_siblings(top, stop_words);

    let top_score = f64::from(scores.score(top.id));
    let min_child_score = top_score * CHILD_SCORE_FRACTION;

    for child in dom::element_children(top) {
        if dom::is_tag(&child, "p") {
            continue;
        }

        if is_high_link_density(&child) {
            debug!(node = %dom::describe(&child), "removing link-heavy child");
            dom::remove(&child);
            continue;
        }

        for para in dom::select_all(&child, "p") {
            if dom::text(&para).chars().count() < MIN_PARAGRAPH_CHARS {
                dom::remove(&para);
            }
        }

        if dom::is_tag(&child, "td") {
            continue;
        }

        if dom::select_all(&child, "p").is_empty() {
            debug!(node = %dom::describe(&child), "removing child without paragraphs");
            dom::remove(&child);
            continue;
        }

        if f64::from(scores.score(child.id)) < min_child_score {
            debug!(
                score = scores.score(child.id),
                node = %dom::describe(&child),
                "removing low-scoring child"
            );
            dom::remove(&child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    const PROSE: &str = "She said that it was the best of all the places to be in the world.";

    fn english() -> StopWords {
        StopWords::english()
    }

    fn ids_in(doc: &Document, selector: &str) -> Vec<String> {
        doc.select(selector)
            .nodes()
            .iter()
            .filter_map(|n| dom::attr(n, "id"))
            .collect()
    }

    #[test]
    fn test_baseline_averages_qualifying_paragraphs() {
        // 6, 3 and the nested 6 qualify, "Short one" does not
        let html = r#"<div id="top">
            <p>it was the best of times and the worst</p>
            <p>the cat and the dog</p>
            <p>Short one</p>
            <div><p>it was the best of times and the worst</p></div>
        </div>"#;
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        assert_eq!(baseline_score_for_siblings(&top, &english()), 5);
    }

    #[test]
    fn test_baseline_defaults_high_without_paragraphs() {
        let doc = Document::from(r#"<div id="top"><span>the and of it</span></div>"#);
        let top = doc.select("#top").nodes()[0];
        assert_eq!(baseline_score_for_siblings(&top, &english()), DEFAULT_BASELINE);
    }

    #[test]
    fn test_container_paragraphs_need_a_baseline() {
        let html = format!(
            r#"<body><div id="side"><p>{PROSE}</p></div><div id="top"><span>{PROSE}</span></div></body>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        add_siblings(&top, &english());
        assert!(doc.select("#top > p").is_empty());
    }

    #[test]
    fn test_sibling_paragraph_is_prepended() {
        let html = format!(
            r#"<body><p id="intro">{PROSE}</p><div id="top"><p id="body">{PROSE}</p></div></body>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        add_siblings(&top, &english());

        assert_eq!(ids_in(&doc, "#top > p"), vec!["intro", "body"]);
        // the original sibling stays where it was
        assert_eq!(doc.select("body > #intro").length(), 1);
    }

    #[test]
    fn test_container_sibling_contributes_rebuilt_paragraphs() {
        let html = format!(
            r#"<body>
                <div id="ad-wrap"><p class="x">{PROSE}</p><p>Advert</p></div>
                <div id="top"><p>{PROSE}</p></div>
            </body>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        add_siblings(&top, &english());

        let paragraphs = doc.select("#top > p");
        assert_eq!(paragraphs.length(), 2);
        // rebuilt paragraphs carry text only
        assert!(doc.select("#top > p.x").is_empty());
        assert!(!doc.select("#top").text().contains("Advert"));
    }

    #[test]
    fn test_farthest_sibling_ends_up_first() {
        let html = format!(
            r#"<body><p id="far">{PROSE}</p><p id="near">{PROSE}</p><div id="top"><p id="own">{PROSE}</p></div></body>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        add_siblings(&top, &english());

        assert_eq!(ids_in(&doc, "#top > p"), vec!["far", "near", "own"]);
    }

    #[test]
    fn test_recovered_text_is_escaped() {
        let html = r#"<body>
            <section><p>It is the case that a &lt; b and that is all of it.</p></section>
            <div id="top"><p>it was the best of times and the worst</p></div>
        </body>"#;
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        add_siblings(&top, &english());

        assert_eq!(doc.select("#top > p").length(), 2);
        assert!(doc.select("#top").text().contains("a < b"));
    }

    #[test]
    fn test_cleanup_removes_link_heavy_and_empty_children() {
        let html = format!(
            r#"<div id="top">
                <p>{PROSE}</p>
                <ul id="nav"><li><a href="/a">Home</a></li><li><a href="/b">About</a></li></ul>
                <div id="empty"><span>just a span</span></div>
                <div id="short"><p>tiny</p></div>
                <p>{PROSE}</p>
            </div>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        let scores = NodeScores::new();
        cleanup_node(&top, &english(), &scores);

        assert!(doc.select("#nav").is_empty());
        assert!(doc.select("#empty").is_empty());
        // its only paragraph was too short, leaving it empty
        assert!(doc.select("#short").is_empty());
        assert_eq!(doc.select("#top > p").length(), 2);
    }

    #[test]
    fn test_cleanup_removes_low_scoring_child() {
        let html = format!(
            r#"<div id="top">
                <p>{PROSE}</p>
                <div id="weak"><p>{PROSE}</p></div>
                <div id="strong"><p>{PROSE}</p></div>
            </div>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        let mut scores = NodeScores::new();
        scores.update_score(top.id, 100);
        scores.update_score(doc.select("#weak").nodes()[0].id, 7);
        scores.update_score(doc.select("#strong").nodes()[0].id, 9);
        cleanup_node(&top, &english(), &scores);

        assert!(doc.select("#weak").is_empty());
        assert_eq!(doc.select("#strong").length(), 1);
    }

    #[test]
    fn test_cleanup_keeps_table_cells() {
        let html = r#"<table><tr id="top">
            <td id="num">42</td>
            <td id="name">Widget</td>
        </tr></table>"#;
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        let mut scores = NodeScores::new();
        scores.update_score(top.id, 100);
        cleanup_node(&top, &english(), &scores);

        assert_eq!(doc.select("#top > td").length(), 2);
    }

    #[test]
    fn test_removed_child_takes_descendants_along() {
        let html = format!(
            r#"<div id="top"><p>{PROSE}</p><div id="gone"><span id="deep"><b id="deeper">x</b></span></div></div>"#
        );
        let doc = Document::from(html);
        let top = doc.select("#top").nodes()[0];
        cleanup_node(&top, &english(), &NodeScores::new());

        assert!(doc.select("#gone").is_empty());
        assert!(doc.select("#deep").is_empty());
        assert!(doc.select("#deeper").is_empty());
    }
}
