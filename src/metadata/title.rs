//! Title extraction from the `<title>` element.
//!
//! Page titles usually carry the site name next to the headline. The first
//! delimiter present decides the split (`|`, then ` - `, then `»`, then `:`)
//! and the longest piece is kept.

use dom_query::Document;

use crate::dom;

/// Delimiters in priority order: (presence check, split pattern).
const TITLE_DELIMITERS: [(&str, &str); 4] = [("|", "|"), ("-", " - "), ("»", "»"), (":", ":")];

/// Extract the article title, or an empty string when the page has none.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    let Some(node) = dom::select_document(doc, "title").into_iter().next() else {
        return String::new();
    };

    let raw = dom::text(&node);
    if raw.is_empty() {
        return String::new();
    }

    let title = TITLE_DELIMITERS
        .iter()
        .find(|(marker, _)| raw.contains(marker))
        .map_or_else(|| raw.clone(), |(_, pattern)| longest_piece(&raw, pattern));

    // U+FFFD shows up on pages with a broken charset declaration
    title.replace('\u{FFFD}', "")
}

/// Split on `pattern`, keep the longest piece (first wins ties) and strip
/// leftover `»` markers.
fn longest_piece(title: &str, pattern: &str) -> String {
    let longest = title.split(pattern).fold("", |best, piece| {
        if piece.chars().count() > best.chars().count() {
            piece
        } else {
            best
        }
    });

    longest.replace("&raquo;", "").replace('»', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(raw: &str) -> String {
        let doc = Document::from(format!("<html><head><title>{raw}</title></head><body></body></html>"));
        extract_title(&doc)
    }

    #[test]
    fn test_pipe_split_keeps_longest_piece() {
        assert_eq!(title_of("News | Storm floods the coastal towns | Site"), "Storm floods the coastal towns");
    }

    #[test]
    fn test_dash_split_needs_spaces() {
        assert_eq!(title_of("Jean-Luc returns to the stage - Daily"), "Jean-Luc returns to the stage");
        assert_eq!(title_of("Jean-Luc"), "Jean-Luc");
    }

    #[test]
    fn test_arrow_and_colon_splits() {
        assert_eq!(title_of("Home » Politics » A long headline here"), "A long headline here");
        assert_eq!(title_of("Review: The film everyone is talking about"), "The film everyone is talking about");
    }

    #[test]
    fn test_pipe_wins_over_other_delimiters() {
        assert_eq!(title_of("Part one: details | Brand"), "Part one: details");
    }

    #[test]
    fn test_plain_title_is_kept() {
        assert_eq!(title_of("  A simple   title "), "A simple title");
    }

    #[test]
    fn test_replacement_characters_are_removed() {
        assert_eq!(title_of("Motley Cr\u{FFFD}e"), "Motley Cre");
    }

    #[test]
    fn test_missing_title() {
        let doc = Document::from("<html><head></head><body><p>x</p></body></html>");
        assert_eq!(extract_title(&doc), "");
    }
}
