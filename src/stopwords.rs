//! Stop-word counting.
//!
//! The stop-word count of a text block is the main "is this prose?" signal
//! used across content scoring, sibling recovery and output formatting.
//!
//! ## Matching rule
//!
//! Punctuation is stripped first (see [`PUNCTUATION`]), the result is split
//! on whitespace, and each token is lowercased and looked up as an exact
//! token. Bundled corpora are one lowercase word per line, so contractions
//! are listed without apostrophes ("dont").

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use crate::patterns::PUNCTUATION;

const ENGLISH_CORPUS: &str = include_str!("../resources/stopwords-en.txt");

static ENGLISH: LazyLock<StopWords> = LazyLock::new(|| StopWords::from_corpus(ENGLISH_CORPUS));

/// Statistics for one text blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Total whitespace-delimited tokens after punctuation stripping.
    pub word_count: usize,
    /// Number of tokens (with repeats) that are stop words.
    pub stop_word_count: usize,
    /// Distinct stop words that matched.
    pub stop_words: BTreeSet<String>,
}

/// A stop-word set for one language.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from caller-supplied words.
    ///
    /// Words are normalized the same way text tokens are, so `"Don't"` and
    /// `"dont"` are the same entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let token = PUNCTUATION.replace_all(w.as_ref().trim(), "").to_lowercase();
                (!token.is_empty()).then_some(token)
            })
            .collect();
        Self { words }
    }

    /// Parse a one-word-per-line corpus. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn from_corpus(corpus: &str) -> Self {
        Self::new(
            corpus
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// The bundled English set.
    #[must_use]
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// Bundled set for an ISO 639-1 language code, if one ships with the crate.
    #[must_use]
    pub fn for_language(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::english()),
            _ => None,
        }
    }

    /// Number of distinct words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a single (already normalized) token is a stop word.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Count stop words in `text`.
    #[must_use]
    pub fn stop_word_count(&self, text: &str) -> WordStats {
        let mut stats = WordStats::default();
        if text.trim().is_empty() {
            return stats;
        }

        let stripped = PUNCTUATION.replace_all(text, "");
        for token in stripped.split_whitespace() {
            stats.word_count += 1;
            let lower = token.to_lowercase();
            if self.words.contains(&lower) {
                stats.stop_word_count += 1;
                stats.stop_words.insert(lower);
            }
        }
        stats
    }
}
