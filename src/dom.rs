//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The extraction algorithms work on
//! `NodeRef` handles because their `NodeId` is a stable arena index: scores are
//! keyed by it and structural edits never invalidate other ids.

use crate::error::{Error, Result};
use crate::patterns::WHITESPACE_NORMALIZE;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// `dom_query` accepts anything, so the only rejected inputs are empty
/// strings and text without any markup at all.
///
/// # Errors
///
/// Returns `Error::Parse` for empty input or input with no tags.
pub fn parse_document(html: &str) -> Result<Document> {
    let trimmed = html.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse("empty document".to_string()));
    }
    if !trimmed.contains('<') {
        return Err(Error::Parse("no markup found".to_string()));
    }
    Ok(Document::from(html))
}

// === Tag/Node Information ===

/// Lowercase tag name, or an empty string for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check an element's tag name.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, expected: &str) -> bool {
    node.is_element() && tag_name(node) == expected
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Short description used in log lines.
#[must_use]
pub fn describe(node: &NodeRef) -> String {
    format!(
        "tag: {} class: {} ID: {}",
        tag_name(node),
        attr(node, "class").unwrap_or_default(),
        attr(node, "id").unwrap_or_default()
    )
}

// === Text Content ===

/// Descendant text with whitespace runs collapsed and the ends trimmed.
#[must_use]
pub fn text(node: &NodeRef) -> String {
    normalize_whitespace(&node.text())
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(raw: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(raw, " ").trim().to_string()
}

/// Outer HTML of a node.
#[must_use]
pub fn outer_html(node: &NodeRef) -> String {
    Selection::from(*node).html().to_string()
}

/// Escape text for embedding inside an HTML fragment.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// === Tree Navigation ===

/// Parent node, only when it is an element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Next element sibling (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Previous element sibling (skipping text nodes).
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// Direct element children, snapshotted so the caller may mutate the tree.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

// === Querying ===

/// All descendants matching a CSS selector, in document order.
#[must_use]
pub fn select_all<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().to_vec()
}

/// All matches of a CSS selector in the whole document, in document order.
#[must_use]
pub fn select_document<'a>(doc: &'a Document, selector: &str) -> Vec<NodeRef<'a>> {
    doc.select(selector).nodes().to_vec()
}

// === Tree Manipulation ===

/// Detach a node and its whole subtree from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    Selection::from(*node).remove();
}

/// Insert an HTML fragment before the node's current first child.
#[inline]
pub fn prepend_html(node: &NodeRef, html: &str) {
    Selection::from(*node).prepend_html(html);
}

/// Rename an element's tag.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}
