//! Synthetic training data for the quality classifier.
//!
//! Labels come from a quality formula that resembles the production
//! weighting but is not the same thing: the divisors here are the
//! generation ranges, not the scorer's saturation caps, and word and
//! sentence counts carry no weight at all.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::features::FeatureVector;
use crate::scorer::{FitStatus, StatusThresholds};

/// One labeled feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub features: FeatureVector,
    pub label: FitStatus,
}

/// Generates `samples` labeled vectors from a seeded generator. The same
/// seed always produces the same set.
pub fn generate_training_set(samples: usize, seed: u64) -> Vec<TrainingSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let thresholds = StatusThresholds::default();

    (0..samples)
        .map(|_| {
            let skill_count = rng.gen_range(1..20u32);
            let experience_years = rng.gen_range(0..15u32);
            let education_score = rng.gen_range(0.0..1.0);
            let job_match_score = rng.gen_range(0.0..1.0);
            let word_count = rng.gen_range(100..1000u32);
            let sentence_count = rng.gen_range(5..100u32);

            let quality = (f64::from(skill_count) / 20.0
                + f64::from(experience_years) / 15.0
                + education_score
                + job_match_score)
                / 4.0;
            let label = FitStatus::from_score(quality, &thresholds);

            TrainingSample {
                features: FeatureVector {
                    skill_count: f64::from(skill_count),
                    experience_years: f64::from(experience_years),
                    education_score,
                    job_match_score,
                    word_count: f64::from(word_count),
                    sentence_count: f64::from(sentence_count),
                },
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_reproduces_the_set() {
        let first = generate_training_set(50, 7);
        let second = generate_training_set(50, 7);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_training_set(50, 7);
        let second = generate_training_set(50, 8);

        assert_ne!(first, second);
    }

    #[test]
    fn test_requested_count_is_generated() {
        assert_eq!(generate_training_set(0, 1).len(), 0);
        assert_eq!(generate_training_set(123, 1).len(), 123);
    }

    #[test]
    fn test_features_stay_in_generation_ranges() {
        for sample in generate_training_set(500, 42) {
            let f = sample.features;
            assert!((1.0..20.0).contains(&f.skill_count), "{f:?}");
            assert!((0.0..15.0).contains(&f.experience_years), "{f:?}");
            assert!((0.0..1.0).contains(&f.education_score), "{f:?}");
            assert!((0.0..1.0).contains(&f.job_match_score), "{f:?}");
            assert!((100.0..1000.0).contains(&f.word_count), "{f:?}");
            assert!((5.0..100.0).contains(&f.sentence_count), "{f:?}");
        }
    }

    #[test]
    fn test_labels_follow_the_quality_formula() {
        let thresholds = StatusThresholds::default();
        for sample in generate_training_set(200, 9) {
            let f = sample.features;
            let quality = (f.skill_count / 20.0
                + f.experience_years / 15.0
                + f.education_score
                + f.job_match_score)
                / 4.0;

            assert_eq!(
                sample.label,
                FitStatus::from_score(quality, &thresholds),
                "label mismatch for {f:?}"
            );
        }
    }

    #[test]
    fn test_every_label_class_appears_at_scale() {
        let labels: Vec<FitStatus> = generate_training_set(2000, 42)
            .into_iter()
            .map(|sample| sample.label)
            .collect();

        for status in [FitStatus::Poor, FitStatus::Fair, FitStatus::Good] {
            assert!(
                labels.contains(&status),
                "expected at least one {status} label"
            );
        }
    }
}
