//! Per-node scoring annotations.
//!
//! Content scores live in a side table keyed by `NodeId` for the duration of
//! one extraction pass. They never touch the node's attribute map, and a node
//! that was never scored reads as zero.

use std::collections::HashMap;

use dom_query::NodeId;

/// Scoring annotation for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeScore {
    /// Cumulative relevance score.
    pub content_score: i32,
    /// How many scored descendants contributed.
    pub content_node_count: u32,
}

/// Side table of node scores for one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct NodeScores {
    scores: HashMap<NodeId, NodeScore>,
}

impl NodeScores {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to a node's content score.
    pub fn update_score(&mut self, id: NodeId, add: i32) {
        let entry = self.scores.entry(id).or_default();
        entry.content_score = entry.content_score.saturating_add(add);
    }

    /// Add to a node's contributing-descendant count.
    pub fn update_node_count(&mut self, id: NodeId, add: u32) {
        let entry = self.scores.entry(id).or_default();
        entry.content_node_count = entry.content_node_count.saturating_add(add);
    }

    /// Content score of a node, zero when unscored.
    #[must_use]
    pub fn score(&self, id: NodeId) -> i32 {
        self.scores.get(&id).map_or(0, |s| s.content_score)
    }

    /// Contributing-descendant count of a node, zero when unscored.
    #[must_use]
    pub fn node_count(&self, id: NodeId) -> u32 {
        self.scores.get(&id).map_or(0, |s| s.content_node_count)
    }

    /// Whether the node received any annotation in this pass.
    #[must_use]
    pub fn is_scored(&self, id: NodeId) -> bool {
        self.scores.contains_key(&id)
    }
}
