//! Train/test splitting and per-class evaluation metrics.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::scorer::FitStatus;

/// Share of samples held out for evaluation.
pub const TEST_FRACTION: f64 = 0.2;

/// Fixed shuffle seed, so a given sample set always splits the same way.
pub const SPLIT_SEED: u64 = 42;

/// Precision, recall and F1 for one verdict class. Metrics with a zero
/// denominator read as 0.0 rather than poisoning the report with NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassReport {
    pub status: FitStatus,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Held-out evaluation of a trained model. Always reports all four
/// classes, absent ones with zero support.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub accuracy: f64,
    pub classes: Vec<ClassReport>,
}

/// Shuffles `0..len` and carves off the test share, rounded up.
/// Returns `(train, test)` index sets.
pub(crate) fn train_test_split(len: usize, rng: &mut StdRng) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);

    let test_len = (len as f64 * TEST_FRACTION).ceil() as usize;
    let train = indices.split_off(test_len);
    (train, indices)
}

pub(crate) fn evaluate(actual: &[FitStatus], predicted: &[FitStatus]) -> Evaluation {
    let total = actual.len();
    let matches = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();
    let accuracy = if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    };

    let classes = FitStatus::ALL
        .iter()
        .map(|&status| {
            let true_positives = actual
                .iter()
                .zip(predicted.iter())
                .filter(|(a, p)| **a == status && **p == status)
                .count();
            let predicted_positives = predicted.iter().filter(|p| **p == status).count();
            let actual_positives = actual.iter().filter(|a| **a == status).count();

            let precision = ratio(true_positives, predicted_positives);
            let recall = ratio(true_positives, actual_positives);
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            ClassReport {
                status,
                precision,
                recall,
                f1,
                support: actual_positives,
            }
        })
        .collect();

    Evaluation { accuracy, classes }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
