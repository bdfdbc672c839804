//! Resume scoring: weighted blend of extracted signals plus a verdict.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::education::EducationExtractor;
use crate::extract::experience::ExperienceExtractor;
use crate::extract::skills::SkillExtractor;
use crate::similarity::SimilarityScorer;

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Skill count at which the skill sub-score reaches full marks.
pub const SKILL_SATURATION: f64 = 10.0;

/// Stated years at which the experience sub-score reaches full marks.
pub const EXPERIENCE_SATURATION: f64 = 10.0;

/// Relative weight of each sub-score in the overall score.
///
/// The defaults sum to 1.0; custom weights need not, since the combined
/// score is clamped to `[0, 1]` either way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub job_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            education: 0.2,
            job_match: 0.1,
        }
    }
}

/// Inclusive lower bounds for each verdict above [`FitStatus::Poor`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.8,
            good: 0.6,
            fair: 0.4,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// Categorical verdict on a screened resume.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FitStatus {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FitStatus {
    /// Every status, worst to best.
    pub const ALL: [FitStatus; 4] = [
        FitStatus::Poor,
        FitStatus::Fair,
        FitStatus::Good,
        FitStatus::Excellent,
    ];

    /// Buckets a score by the thresholds. Bounds are inclusive, so 0.8
    /// with default thresholds is already [`FitStatus::Excellent`].
    pub fn from_score(score: f64, thresholds: &StatusThresholds) -> Self {
        if score >= thresholds.excellent {
            FitStatus::Excellent
        } else if score >= thresholds.good {
            FitStatus::Good
        } else if score >= thresholds.fair {
            FitStatus::Fair
        } else {
            FitStatus::Poor
        }
    }

    pub fn as_label(self) -> u8 {
        match self {
            FitStatus::Poor => 0,
            FitStatus::Fair => 1,
            FitStatus::Good => 2,
            FitStatus::Excellent => 3,
        }
    }

    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(FitStatus::Poor),
            1 => Some(FitStatus::Fair),
            2 => Some(FitStatus::Good),
            3 => Some(FitStatus::Excellent),
            _ => None,
        }
    }
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitStatus::Poor => "Poor",
            FitStatus::Fair => "Fair",
            FitStatus::Good => "Good",
            FitStatus::Excellent => "Excellent",
        };
        write!(f, "{label}")
    }
}

/// The four sub-scores before weighting, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub job_match_score: f64,
}

/// Everything the screener determined about one resume.
///
/// Scores are rounded to two decimals for display; the verdict comes from
/// the unrounded overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub overall_score: f64,
    pub status: FitStatus,
    pub skills: BTreeSet<String>,
    pub experience_years: u32,
    pub education_score: f64,
    pub job_match_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// One entry in a ranked batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResume {
    pub name: String,
    pub result: ScreeningResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ResumeScorer {
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    similarity: SimilarityScorer,
    weights: ScoringWeights,
    thresholds: StatusThresholds,
}

impl ResumeScorer {
    pub fn new(
        skills: SkillExtractor,
        experience: ExperienceExtractor,
        education: EducationExtractor,
        similarity: SimilarityScorer,
        weights: ScoringWeights,
        thresholds: StatusThresholds,
    ) -> Self {
        Self {
            skills,
            experience,
            education,
            similarity,
            weights,
            thresholds,
        }
    }

    /// Screens one resume against one job description.
    pub fn screen(&self, resume_text: &str, job_description: &str) -> ScreeningResult {
        let skills = self.skills.extract(resume_text);
        let experience_years = self.experience.extract(resume_text);
        let education_score = self.education.extract(resume_text);
        let job_match_score = self.similarity.score(resume_text, job_description);

        let skill_score = (skills.len() as f64 / SKILL_SATURATION).min(1.0);
        let experience_score = (f64::from(experience_years) / EXPERIENCE_SATURATION).min(1.0);

        let overall = (self.weights.skills * skill_score
            + self.weights.experience * experience_score
            + self.weights.education * education_score
            + self.weights.job_match * job_match_score)
            .clamp(0.0, 1.0);

        // The verdict comes from the unrounded score; rounding is display-only.
        let status = FitStatus::from_score(overall, &self.thresholds);

        debug!(
            skill_score,
            experience_score,
            education_score,
            job_match_score,
            overall_score = overall,
            status = %status,
            "Screened resume"
        );

        ScreeningResult {
            overall_score: round2(overall),
            status,
            skills,
            experience_years,
            education_score: round2(education_score),
            job_match_score: round2(job_match_score),
            breakdown: ScoreBreakdown {
                skill_score: round2(skill_score),
                experience_score: round2(experience_score),
                education_score: round2(education_score),
                job_match_score: round2(job_match_score),
            },
        }
    }

    /// Screens a batch of `(name, resume_text)` pairs and ranks them by
    /// overall score, best first.
    pub fn screen_batch(
        &self,
        resumes: &[(String, String)],
        job_description: &str,
    ) -> Vec<RankedResume> {
        let mut ranked: Vec<RankedResume> = resumes
            .iter()
            .map(|(name, text)| RankedResume {
                name: name.clone(),
                result: self.screen(text, job_description),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.result
                .overall_score
                .partial_cmp(&a.result.overall_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scorer() -> ResumeScorer {
        ResumeScorer::default()
    }

    #[test]
    fn test_from_score_buckets() {
        let thresholds = StatusThresholds::default();

        assert_eq!(FitStatus::from_score(0.0, &thresholds), FitStatus::Poor);
        assert_eq!(FitStatus::from_score(0.39, &thresholds), FitStatus::Poor);
        assert_eq!(FitStatus::from_score(0.4, &thresholds), FitStatus::Fair);
        assert_eq!(FitStatus::from_score(0.59, &thresholds), FitStatus::Fair);
        assert_eq!(FitStatus::from_score(0.6, &thresholds), FitStatus::Good);
        assert_eq!(FitStatus::from_score(0.79, &thresholds), FitStatus::Good);
        assert_eq!(FitStatus::from_score(0.8, &thresholds), FitStatus::Excellent);
        assert_eq!(FitStatus::from_score(1.0, &thresholds), FitStatus::Excellent);
    }

    #[test]
    fn test_labels_round_trip() {
        for status in FitStatus::ALL {
            assert_eq!(FitStatus::from_label(status.as_label()), Some(status));
        }
        assert_eq!(FitStatus::from_label(4), None);
    }

    #[test]
    fn test_screen_weak_resume() {
        let scorer = make_scorer();
        let result = scorer.screen(
            "python java 5 years of experience bachelor degree",
            "senior rust engineer",
        );

        assert_eq!(result.skills.len(), 2);
        assert_eq!(result.experience_years, 5);
        // skill 2/10, experience 5/10, education 2/13, job match neutral-free:
        // both sides non-empty and disjoint after normalization except none
        // shared, so job_match is 0.0.
        // 0.4*0.2 + 0.3*0.5 + 0.2*(2/13) + 0.1*0.0 = 0.2608
        assert_eq!(result.breakdown.skill_score, 0.2);
        assert_eq!(result.breakdown.experience_score, 0.5);
        assert_eq!(result.education_score, 0.15);
        assert_eq!(result.status, FitStatus::Poor);
        assert!(
            (result.overall_score - 0.26).abs() < 1e-9,
            "expected 0.26, got {}",
            result.overall_score
        );
    }

    #[test]
    fn test_screen_against_empty_job_description() {
        let scorer = make_scorer();
        let result = scorer.screen("Bachelor degree, 5 years experience, python java skills", "");

        assert_eq!(result.skills.len(), 2);
        assert!(result.skills.contains("python"));
        assert!(result.skills.contains("java"));
        assert_eq!(result.experience_years, 5);
        assert_eq!(result.education_score, 0.15);
        assert_eq!(result.job_match_score, 0.5, "empty JD is neutral");
        // 0.4*0.2 + 0.3*0.5 + 0.2*(2/13) + 0.1*0.5 = 0.3108
        assert!(
            (result.overall_score - 0.31).abs() < 1e-9,
            "expected 0.31, got {}",
            result.overall_score
        );
        assert_eq!(result.status, FitStatus::Poor);
    }

    #[test]
    fn test_screen_excellent_resume() {
        let scorer = make_scorer();
        let resume = "python java javascript html css sql mysql aws docker kubernetes \
                      with 10 years of experience bachelor master phd university";
        let result = scorer.screen(resume, resume);

        // Ten skills saturate at 1.0, ten years saturate at 1.0, education is
        // 4/13, job match against itself is 1.0:
        // 0.4*1.0 + 0.3*1.0 + 0.2*(4/13) + 0.1*1.0 = 0.8615
        assert_eq!(result.breakdown.skill_score, 1.0);
        assert_eq!(result.breakdown.experience_score, 1.0);
        assert_eq!(result.status, FitStatus::Excellent);
        assert!(
            (result.overall_score - 0.86).abs() < 1e-9,
            "expected 0.86, got {}",
            result.overall_score
        );
    }

    #[test]
    fn test_saturation_caps_sub_scores() {
        let scorer = make_scorer();
        let result = scorer.screen("25 years of experience", "");

        assert_eq!(result.experience_years, 25);
        assert_eq!(result.breakdown.experience_score, 1.0);
    }

    #[test]
    fn test_status_uses_the_unrounded_score() {
        // Weights chosen so the overall score lands at 0.796: displays as
        // 0.8 but stays below the 0.8 excellent threshold.
        let weights = ScoringWeights {
            skills: 0.796,
            experience: 0.0,
            education: 0.0,
            job_match: 0.0,
        };
        let scorer = ResumeScorer::new(
            SkillExtractor::default(),
            ExperienceExtractor::default(),
            EducationExtractor::default(),
            SimilarityScorer::default(),
            weights,
            StatusThresholds::default(),
        );
        let result = scorer.screen(
            "python java javascript html css sql mysql aws docker kubernetes",
            "",
        );

        assert_eq!(result.breakdown.skill_score, 1.0);
        assert_eq!(result.overall_score, 0.8, "display rounds up");
        assert_eq!(result.status, FitStatus::Good, "verdict does not");
    }

    #[test]
    fn test_overall_score_is_clamped() {
        let weights = ScoringWeights {
            skills: 1.0,
            experience: 1.0,
            education: 1.0,
            job_match: 1.0,
        };
        let scorer = ResumeScorer::new(
            SkillExtractor::default(),
            ExperienceExtractor::default(),
            EducationExtractor::default(),
            SimilarityScorer::default(),
            weights,
            StatusThresholds::default(),
        );
        let resume = "python java javascript html css sql mysql aws docker kubernetes \
                      with 10 years of experience bachelor master phd university";
        let result = scorer.screen(resume, resume);

        assert_eq!(result.overall_score, 1.0);
        assert_eq!(result.status, FitStatus::Excellent);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let scorer = make_scorer();
        for text in ["", "plumber", "1000 years of experience", "python"] {
            let result = scorer.screen(text, "python engineer");
            assert!(
                (0.0..=1.0).contains(&result.overall_score),
                "overall out of range for {text:?}: {}",
                result.overall_score
            );
        }
    }

    #[test]
    fn test_batch_is_ranked_best_first() {
        let scorer = make_scorer();
        let resumes = vec![
            ("weak".to_string(), "plumber".to_string()),
            (
                "strong".to_string(),
                "python java sql aws docker 10 years of experience \
                 bachelor degree university"
                    .to_string(),
            ),
            (
                "middle".to_string(),
                "python 2 years of experience".to_string(),
            ),
        ];
        let ranked = scorer.screen_batch(&resumes, "python engineer with aws");

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "strong");
        assert_eq!(ranked[2].name, "weak");
        assert!(ranked[0].result.overall_score >= ranked[1].result.overall_score);
        assert!(ranked[1].result.overall_score >= ranked[2].result.overall_score);
    }

    #[test]
    fn test_empty_batch() {
        let scorer = make_scorer();
        assert!(scorer.screen_batch(&[], "python engineer").is_empty());
    }
}
