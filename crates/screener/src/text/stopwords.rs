use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Membership filter over the English stopword list.
///
/// Lookups are case-insensitive; the backing list is lowercase.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Filter backed by the crate's full English list.
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// Filter that treats no word as a stopword.
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Filter over a custom word list, for test fixtures.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
