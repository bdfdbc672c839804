//! The numeric view of a screened resume the classifier consumes.

use serde::{Deserialize, Serialize};

use crate::scorer::ScreeningResult;

/// Fixed-order feature vector: skill count, stated years, education score,
/// job match score, word count, sentence count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub skill_count: f64,
    pub experience_years: f64,
    pub education_score: f64,
    pub job_match_score: f64,
    pub word_count: f64,
    pub sentence_count: f64,
}

impl FeatureVector {
    pub const DIM: usize = 6;

    /// Derives the vector from a screening result plus the raw text the
    /// result came from. Words are whitespace runs; sentences are period
    /// splits, so text without a period still counts as one sentence.
    pub fn from_screening(result: &ScreeningResult, resume_text: &str) -> Self {
        Self {
            skill_count: result.skills.len() as f64,
            experience_years: f64::from(result.experience_years),
            education_score: result.education_score,
            job_match_score: result.job_match_score,
            word_count: resume_text.split_whitespace().count() as f64,
            sentence_count: resume_text.split('.').count() as f64,
        }
    }

    pub fn as_array(&self) -> [f64; Self::DIM] {
        [
            self.skill_count,
            self.experience_years,
            self.education_score,
            self.job_match_score,
            self.word_count,
            self.sentence_count,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::ResumeScorer;

    #[test]
    fn test_array_order_is_fixed() {
        let features = FeatureVector {
            skill_count: 1.0,
            experience_years: 2.0,
            education_score: 3.0,
            job_match_score: 4.0,
            word_count: 5.0,
            sentence_count: 6.0,
        };

        assert_eq!(features.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_screening_counts_text_shape() {
        let scorer = ResumeScorer::default();
        let text = "python java 5 years of experience bachelor degree";
        let result = scorer.screen(text, "senior rust engineer");
        let features = FeatureVector::from_screening(&result, text);

        assert_eq!(features.skill_count, 2.0);
        assert_eq!(features.experience_years, 5.0);
        assert_eq!(features.word_count, 8.0);
        // No period: the whole text is one sentence.
        assert_eq!(features.sentence_count, 1.0);
    }

    #[test]
    fn test_sentence_count_splits_on_periods() {
        let scorer = ResumeScorer::default();
        let text = "Shipped python services. Led a team. Mentored juniors.";
        let result = scorer.screen(text, "");
        let features = FeatureVector::from_screening(&result, text);

        // Three periods make four pieces, the trailing empty one included.
        assert_eq!(features.sentence_count, 4.0);
    }

    #[test]
    fn test_empty_text() {
        let scorer = ResumeScorer::default();
        let result = scorer.screen("", "");
        let features = FeatureVector::from_screening(&result, "");

        assert_eq!(features.word_count, 0.0);
        assert_eq!(features.sentence_count, 1.0);
    }
}
