// Text normalization pipeline: lowercase, strip, tokenize, filter, stem.

pub mod stem;
pub mod stopwords;

use crate::text::stem::stem;
use crate::text::stopwords::StopwordFilter;

/// Normalizes free-form text for similarity comparison.
///
/// Pipeline: lowercase, drop everything but ASCII letters and whitespace,
/// split on whitespace, drop stopwords, stem each remaining token, rejoin
/// with single spaces. Empty input yields an empty string, never an error.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn normalize(&self, text: &str) -> String {
        let letters_only: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        letters_only
            .split_whitespace()
            .filter(|token| !self.stopwords.is_stopword(token))
            .map(stem)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
