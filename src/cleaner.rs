//! Document cleaning before content scoring.
//!
//! The default cleaner discards elements that never carry article text
//! (scripts, forms, navigation chrome), removes containers whose id, class or
//! name looks like boilerplate, and turns text-only `div`s into paragraphs so
//! they take part in scoring.

use tracing::debug;

use crate::dom::{self, Document};
use crate::patterns::{BOILERPLATE_ID_CLASS, CLEAN_SELECTOR};

/// A `div` containing any of these stays a container.
const DIV_BLOCK_CHILDREN: &str = "a, blockquote, dl, div, img, ol, p, pre, table, ul";

/// Elements inside `body` carrying an attribute the boilerplate pattern checks.
const NAMED_ELEMENTS: &str = "body [id], body [class], body [name]";

/// Prepares a parsed document for content scoring.
///
/// Implementations mutate the document in place and must be idempotent:
/// cleaning an already-cleaned document changes nothing.
pub trait DocumentCleaner {
    /// Clean the document in place.
    fn clean(&self, doc: &Document);
}

/// The cleaner used unless the caller supplies another one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDocumentCleaner;

impl DocumentCleaner for DefaultDocumentCleaner {
    fn clean(&self, doc: &Document) {
        remove_unwanted_elements(doc);
        remove_boilerplate_containers(doc);
        convert_divs_to_paragraphs(doc);
    }
}

/// Remove scripts, styles, forms, frames and page chrome.
pub fn remove_unwanted_elements(doc: &Document) {
    let unwanted = doc.select(CLEAN_SELECTOR);
    if unwanted.exists() {
        debug!(count = unwanted.length(), "removing unwanted elements");
        unwanted.remove();
    }
}

/// Remove elements whose id, class or name matches the boilerplate pattern.
///
/// `html` and `body` are never candidates.
pub fn remove_boilerplate_containers(doc: &Document) {
    for node in dom::select_document(doc, NAMED_ELEMENTS) {
        let is_boilerplate = ["id", "class", "name"].iter().any(|name| {
            dom::attr(&node, name).is_some_and(|value| BOILERPLATE_ID_CLASS.is_match(&value))
        });
        if is_boilerplate {
            debug!(node = %dom::describe(&node), "removing boilerplate container");
            dom::remove(&node);
        }
    }
}

/// Rename `div`s without block-level descendants to `p`.
pub fn convert_divs_to_paragraphs(doc: &Document) {
    let mut converted = 0;
    for div in dom::select_document(doc, "div") {
        if dom::select_all(&div, DIV_BLOCK_CHILDREN).is_empty() {
            dom::rename(&div, "p");
            converted += 1;
        }
    }
    if converted > 0 {
        debug!(count = converted, "converted text divs to paragraphs");
    }
}
