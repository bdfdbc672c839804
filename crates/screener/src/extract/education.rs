//! Education signal scoring.

use crate::catalog::EducationKeywords;

/// Scores education as the fraction of catalog keywords the text mentions.
///
/// Each keyword counts at most once however often it appears, the match is
/// case-insensitive substring containment, and the score is capped at 1.0.
/// An empty keyword list scores every text as 0.0.
#[derive(Debug, Clone, Default)]
pub struct EducationExtractor {
    keywords: EducationKeywords,
}

impl EducationExtractor {
    pub fn new(keywords: EducationKeywords) -> Self {
        Self { keywords }
    }

    pub fn extract(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }

        let text_lower = text.to_lowercase();
        let present = self
            .keywords
            .iter()
            .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
            .count();

        (present as f64 / self.keywords.len() as f64).min(1.0)
    }
}
