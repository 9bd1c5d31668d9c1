//! Content scoring by paragraph clustering.
//!
//! Text-bearing nodes (`p`, `pre`, `td`) push a score made of their stop-word
//! count plus a positional boost onto their parent and grandparent. The
//! ancestor with the highest cumulative score is the content root.
//!
//! Positional boost: the first paragraphs that are followed by more prose get
//! a harmonically decaying bonus, while on long pages the last quarter of the
//! candidates is penalized because that is where comments usually live.

use tracing::debug;

use crate::dom::{self, Document, NodeRef};
use crate::link_density::is_high_link_density;
use crate::patterns::TEXT_NODE_SELECTOR;
use crate::scoring::NodeScores;
use crate::stopwords::StopWords;

/// A node must have more stop words than this to be a candidate.
const MIN_STOP_WORDS: usize = 2;

/// Weight of the first positional boost; later boosts are divided down.
const BOOST_WEIGHT: f64 = 50.0;

/// Negative scoring only kicks in above this many candidates.
const MIN_NODES_FOR_NEGATIVE_SCORE: usize = 15;

/// Share of trailing candidates that receive a negative boost.
const BOTTOM_NODES_FRACTION: f64 = 0.25;

/// Ceiling on the accumulated negative boost.
const MAX_NEGATIVE_SCORE: f64 = 40.0;

/// Boost used instead of a negative one once the ceiling would be crossed.
const CLAMPED_BOOST: f64 = 5.0;

/// A following paragraph needs more stop words than this to allow a boost.
const MIN_SIBLING_STOP_WORDS: usize = 5;

/// A following paragraph this many siblings away is too far to count.
const MAX_STEPS_AWAY: usize = 3;

/// Candidate node together with its stop-word count.
#[derive(Debug, Clone, Copy)]
pub struct TextNode<'a> {
    /// The `p`, `pre` or `td` element.
    pub node: NodeRef<'a>,
    /// Stop words in its text.
    pub stop_word_count: usize,
}

/// Collect the text-bearing candidate nodes in document order.
///
/// A node qualifies with more than two stop words and without high link density.
#[must_use]
pub fn nodes_with_text<'a>(doc: &'a Document, stop_words: &StopWords) -> Vec<TextNode<'a>> {
    dom::select_document(doc, TEXT_NODE_SELECTOR)
        .into_iter()
        .filter_map(|node| {
            let stop_word_count = stop_words.stop_word_count(&node.text()).stop_word_count;
            (stop_word_count > MIN_STOP_WORDS && !is_high_link_density(&node))
                .then_some(TextNode { node, stop_word_count })
        })
        .collect()
}

/// Decide whether a paragraph is connected to the article flow.
///
/// Walks the following element siblings looking for a paragraph with some
/// prose in it. The first paragraph of an article is often an image caption,
/// which has no such neighbour.
#[must_use]
pub fn is_ok_to_boost(node: &NodeRef, stop_words: &StopWords) -> bool {
    let mut steps_away = 0;
    let mut sibling = dom::next_element_sibling(node);

    while let Some(current) = sibling {
        if dom::is_tag(&current, "p") {
            if steps_away >= MAX_STEPS_AWAY {
                debug!("next paragraph is too far away, not boosting");
                return false;
            }

            let count = stop_words.stop_word_count(&current.text()).stop_word_count;
            if count > MIN_SIBLING_STOP_WORDS {
                debug!("boosting node, followed by prose");
                return true;
            }
        }

        steps_away += 1;
        sibling = dom::next_element_sibling(&current);
    }

    false
}

/// Find the content root of a cleaned document.
///
/// Scores are written into `scores` so later stages (cleanup, formatting)
/// can read them. Returns `None` when no node qualifies, which means the page
/// has no extractable content.
pub fn calculate_best_node<'a>(
    doc: &'a Document,
    stop_words: &StopWords,
    scores: &mut NodeScores,
) -> Option<NodeRef<'a>> {
    let nodes = nodes_with_text(doc, stop_words);
    let number_of_nodes = nodes.len();
    let bottom_nodes_for_negative_score = number_of_nodes as f64 * BOTTOM_NODES_FRACTION;

    debug!(count = number_of_nodes, "inspecting nodes with text");

    let mut starting_boost = 1.0_f64;
    let mut negative_scoring = 0.0_f64;
    // Insertion-ordered so ties resolve to the first ancestor seen.
    let mut parent_nodes: Vec<NodeRef<'a>> = Vec::new();

    for (i, text_node) in nodes.iter().enumerate() {
        let node = &text_node.node;
        let mut boost_score = 0.0_f64;

        if is_ok_to_boost(node, stop_words) {
            boost_score = (1.0 / starting_boost) * BOOST_WEIGHT;
            starting_boost += 1.0;
        }

        if number_of_nodes > MIN_NODES_FOR_NEGATIVE_SCORE {
            let remaining = (number_of_nodes - i) as f64;
            if remaining <= bottom_nodes_for_negative_score {
                let booster = bottom_nodes_for_negative_score - remaining;
                boost_score = -booster.powi(2);

                if negative_scoring + boost_score.abs() > MAX_NEGATIVE_SCORE {
                    boost_score = CLAMPED_BOOST;
                } else {
                    negative_scoring += boost_score.abs();
                }
            }
        }

        debug!(iteration = i, boost = boost_score, "location boost score");

        let upscore = (text_node.stop_word_count as f64 + boost_score) as i32;

        let Some(parent) = dom::parent_element(node) else {
            continue;
        };
        scores.update_score(parent.id, upscore);
        scores.update_node_count(parent.id, 1);
        remember(&mut parent_nodes, parent);

        if let Some(grandparent) = dom::parent_element(&parent) {
            scores.update_score(grandparent.id, upscore / 2);
            scores.update_node_count(grandparent.id, 1);
            remember(&mut parent_nodes, grandparent);
        }
    }

    let mut top_node: Option<NodeRef<'a>> = None;
    let mut top_node_score = 0;
    for candidate in parent_nodes {
        let score = scores.score(candidate.id);
        debug!(
            score,
            nodes = scores.node_count(candidate.id),
            node = %dom::describe(&candidate),
            "parent node"
        );

        if score > top_node_score {
            top_node = Some(candidate);
            top_node_score = score;
        }
        if top_node.is_none() {
            top_node = Some(candidate);
        }
    }

    match top_node {
        Some(ref node) => debug!(score = top_node_score, node = %dom::describe(node), "top node"),
        None => debug!("no top node found"),
    }

    top_node
}

fn remember<'a>(seen: &mut Vec<NodeRef<'a>>, node: NodeRef<'a>) {
    if !seen.iter().any(|n| n.id == node.id) {
        seen.push(node);
    }
}
