//! Link Density Testing
//!
//! Decides whether a block is link-saturated and therefore probably
//! navigation or boilerplate. Used when picking candidate paragraphs and
//! again when pruning children of the content root.

use crate::dom::{self, NodeRef};

/// Word-level link statistics for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStats {
    /// Whitespace-delimited words in the node's text.
    pub words: usize,
    /// Words inside the node's `<a>` descendants.
    pub link_words: usize,
    /// Number of `<a>` descendants.
    pub links: usize,
}

impl LinkStats {
    /// Collect link statistics for a node.
    #[must_use]
    pub fn collect(node: &NodeRef) -> Self {
        let links = dom::select_all(node, "a");
        let link_words = links
            .iter()
            .map(|link| link.text().split_whitespace().count())
            .sum();

        Self {
            words: node.text().split_whitespace().count(),
            link_words,
            links: links.len(),
        }
    }

    /// `(link_words / words) * links`.
    ///
    /// An empty side counts as one word, so a link shell without any text
    /// scores exactly its link count.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.links == 0 {
            return 0.0;
        }
        let words = self.words.max(1) as f64;
        let link_words = self.link_words.max(1) as f64;
        (link_words / words) * self.links as f64
    }
}

/// Check whether a node's text is dominated by links.
///
/// A node without any `<a>` descendants is never high density.
#[must_use]
pub fn is_high_link_density(node: &NodeRef) -> bool {
    let stats = LinkStats::collect(node);
    if stats.links == 0 {
        return false;
    }
    stats.score() > 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes()[0]
    }

    #[test]
    fn test_no_links_is_never_dense() {
        let doc = Document::from("<p>short</p><div id='long'>".to_string() + &"word ".repeat(500) + "</div>");
        assert!(!is_high_link_density(&first(&doc, "p")));
        assert!(!is_high_link_density(&first(&doc, "#long")));
    }

    #[test]
    fn test_all_text_in_two_links_is_dense() {
        let doc = Document::from(r#"<div><a href="/a">alpha beta</a> <a href="/b">gamma delta</a></div>"#);
        let div = first(&doc, "div");
        let stats = LinkStats::collect(&div);

        assert_eq!(stats.words, 4);
        assert_eq!(stats.link_words, 4);
        assert_eq!(stats.links, 2);
        assert!((stats.score() - 2.0).abs() < f64::EPSILON);
        assert!(is_high_link_density(&div));
    }

    #[test]
    fn test_nav_menu_is_dense() {
        let html = r#"
        <ul>
            <li><a href="/home">Home</a></li>
            <li><a href="/about">About</a></li>
            <li><a href="/contact">Contact</a></li>
        </ul>
        "#;
        let doc = Document::from(html);
        assert!(is_high_link_density(&first(&doc, "ul")));
    }

    #[test]
    fn test_article_paragraph_with_one_link_is_not_dense() {
        let html = r#"
        <p>
            This is a long paragraph with substantial text content that discusses
            various topics. It contains a <a href="/link">single link</a> but the
            majority of the content is regular text, not links.
        </p>
        "#;
        let doc = Document::from(html);
        assert!(!is_high_link_density(&first(&doc, "p")));
    }

    #[test]
    fn test_single_link_covering_all_text_is_not_dense() {
        // ratio 1.0 * 1 link = 1.0, which is not strictly above the threshold
        let doc = Document::from(r#"<p><a href="/x">read the whole story</a></p>"#);
        assert!(!is_high_link_density(&first(&doc, "p")));
    }

    #[test]
    fn test_empty_link_shells() {
        let doc = Document::from(r#"<div id="one"><a href="/x"></a></div><div id="two"><a href="/x"></a><a href="/y"></a></div>"#);
        assert!(!is_high_link_density(&first(&doc, "#one")));
        assert!(is_high_link_density(&first(&doc, "#two")));
    }
}
