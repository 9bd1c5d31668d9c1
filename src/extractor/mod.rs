//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `clustering`: Paragraph scoring and content root selection
//! - `cleanup`: Sibling recovery and pruning of the content root
//! - `videos`: Embedded video detection around the content root
//! - `formatter`: Plain-text rendering of the cleaned root
//!
//! # Usage
//!
//! ```rust,ignore
//! use rs_goose::extractor::{calculate_best_node, cleanup_node, formatted_text};
//!
//! let mut scores = NodeScores::new();
//! if let Some(top) = calculate_best_node(&doc, &stop_words, &mut scores) {
//!     cleanup_node(&top, &stop_words, &scores);
//!     let text = formatted_text(&top, &stop_words, &scores);
//! }
//! ```

pub mod cleanup;
pub mod clustering;
pub mod formatter;
pub mod videos;

pub use cleanup::{add_siblings, baseline_score_for_siblings, cleanup_node};
pub use clustering::{calculate_best_node, is_ok_to_boost, nodes_with_text, TextNode};
pub use formatter::formatted_text;
pub use videos::extract_videos;
