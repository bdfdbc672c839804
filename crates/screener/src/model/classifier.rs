//! Gaussian naive Bayes over screening feature vectors.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ScreenerError;
use crate::model::evaluation::{self, Evaluation, SPLIT_SEED};
use crate::model::features::FeatureVector;
use crate::model::synthetic::TrainingSample;
use crate::scorer::FitStatus;

/// Variance floor, as a share of the largest per-feature variance in the
/// fitted data. Keeps the likelihood finite for features that never vary.
const VAR_SMOOTHING: f64 = 1e-9;

// ────────────────────────────────────────────────────────────────────────────
// Gaussian naive Bayes
// ────────────────────────────────────────────────────────────────────────────

/// Fitted model parameters. This struct is the saved artifact, verbatim.
///
/// `classes` holds only the statuses present in the fitted data, worst to
/// best; `priors`, `means` and `variances` are indexed in parallel with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianNb {
    classes: Vec<FitStatus>,
    priors: Vec<f64>,
    means: Vec<[f64; FeatureVector::DIM]>,
    variances: Vec<[f64; FeatureVector::DIM]>,
}

impl GaussianNb {
    fn fit(samples: &[TrainingSample]) -> Result<Self, ScreenerError> {
        if samples.is_empty() {
            return Err(ScreenerError::EmptyTrainingSet);
        }

        let total = samples.len() as f64;
        let mut classes = Vec::new();
        let mut priors = Vec::new();
        let mut means = Vec::new();
        let mut variances = Vec::new();

        for status in FitStatus::ALL {
            let rows: Vec<[f64; FeatureVector::DIM]> = samples
                .iter()
                .filter(|sample| sample.label == status)
                .map(|sample| sample.features.as_array())
                .collect();
            if rows.is_empty() {
                continue;
            }

            classes.push(status);
            priors.push(rows.len() as f64 / total);
            let mean = column_means(&rows);
            variances.push(column_variances(&rows, &mean));
            means.push(mean);
        }

        // Smooth every variance by a fraction of the widest feature spread,
        // so a constant feature cannot zero out a class likelihood.
        let all_rows: Vec<[f64; FeatureVector::DIM]> =
            samples.iter().map(|s| s.features.as_array()).collect();
        let overall_mean = column_means(&all_rows);
        let spread = column_variances(&all_rows, &overall_mean)
            .into_iter()
            .fold(0.0, f64::max);
        let epsilon = if spread > 0.0 {
            VAR_SMOOTHING * spread
        } else {
            VAR_SMOOTHING
        };
        for class_variances in &mut variances {
            for variance in class_variances.iter_mut() {
                *variance += epsilon;
            }
        }

        Ok(Self {
            classes,
            priors,
            means,
            variances,
        })
    }

    /// Unnormalized log posterior for each fitted class.
    fn joint_log_likelihood(&self, features: &FeatureVector) -> Vec<f64> {
        let x = features.as_array();
        self.classes
            .iter()
            .enumerate()
            .map(|(index, _)| {
                let mut log_likelihood = self.priors[index].ln();
                for j in 0..FeatureVector::DIM {
                    let mean = self.means[index][j];
                    let variance = self.variances[index][j];
                    log_likelihood -= 0.5 * (2.0 * std::f64::consts::PI * variance).ln();
                    log_likelihood -= (x[j] - mean).powi(2) / (2.0 * variance);
                }
                log_likelihood
            })
            .collect()
    }

    /// Posterior probability per fitted class, in `classes` order.
    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let log_likelihoods = self.joint_log_likelihood(features);
        // Log-sum-exp keeps the normalization stable for extreme inputs.
        let max = log_likelihoods.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let exponentials: Vec<f64> = log_likelihoods
            .iter()
            .map(|&value| (value - max).exp())
            .collect();
        let total: f64 = exponentials.iter().sum();
        exponentials.into_iter().map(|value| value / total).collect()
    }

    fn predict(&self, features: &FeatureVector) -> FitStatus {
        self.classes[argmax(&self.joint_log_likelihood(features))]
    }
}

fn column_means(rows: &[[f64; FeatureVector::DIM]]) -> [f64; FeatureVector::DIM] {
    let mut means = [0.0; FeatureVector::DIM];
    for row in rows {
        for (mean, value) in means.iter_mut().zip(row.iter()) {
            *mean += value;
        }
    }
    for mean in &mut means {
        *mean /= rows.len() as f64;
    }
    means
}

/// Biased (population) variance per column.
fn column_variances(
    rows: &[[f64; FeatureVector::DIM]],
    means: &[f64; FeatureVector::DIM],
) -> [f64; FeatureVector::DIM] {
    let mut variances = [0.0; FeatureVector::DIM];
    for row in rows {
        for j in 0..FeatureVector::DIM {
            variances[j] += (row[j] - means[j]).powi(2);
        }
    }
    for variance in &mut variances {
        *variance /= rows.len() as f64;
    }
    variances
}

/// Index of the largest value; the first one wins a tie.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

// ────────────────────────────────────────────────────────────────────────────
// Public classifier
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of loading a saved model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLoad {
    Loaded,
    /// Nothing at that path. Not an error: a cold start trains fresh.
    NotFound,
}

/// Posterior probability per verdict. Classes absent from training read 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub poor: f64,
    pub fair: f64,
    pub good: f64,
    pub excellent: f64,
}

impl ClassProbabilities {
    fn zeroed() -> Self {
        Self {
            poor: 0.0,
            fair: 0.0,
            good: 0.0,
            excellent: 0.0,
        }
    }

    fn set(&mut self, status: FitStatus, value: f64) {
        match status {
            FitStatus::Poor => self.poor = value,
            FitStatus::Fair => self.fair = value,
            FitStatus::Good => self.good = value,
            FitStatus::Excellent => self.excellent = value,
        }
    }

    pub fn get(&self, status: FitStatus) -> f64 {
        match status {
            FitStatus::Poor => self.poor,
            FitStatus::Fair => self.fair,
            FitStatus::Good => self.good,
            FitStatus::Excellent => self.excellent,
        }
    }
}

/// A model-backed verdict with its confidence, the posterior probability
/// of the predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub status: FitStatus,
    pub confidence: f64,
    pub probabilities: ClassProbabilities,
}

/// Trainable resume quality classifier with artifact persistence.
#[derive(Debug, Default)]
pub struct QualityClassifier {
    model: Option<GaussianNb>,
}

impl QualityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Fits on an 80/20 split of `samples` and reports held-out metrics.
    /// The split is seeded, so the same samples always evaluate the same.
    pub fn train(&mut self, samples: &[TrainingSample]) -> Result<Evaluation, ScreenerError> {
        let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
        let (train_indices, test_indices) = evaluation::train_test_split(samples.len(), &mut rng);
        if train_indices.is_empty() || test_indices.is_empty() {
            return Err(ScreenerError::EmptyTrainingSet);
        }

        let train_samples: Vec<TrainingSample> =
            train_indices.iter().map(|&i| samples[i]).collect();
        let model = GaussianNb::fit(&train_samples)?;

        let actual: Vec<FitStatus> = test_indices.iter().map(|&i| samples[i].label).collect();
        let predicted: Vec<FitStatus> = test_indices
            .iter()
            .map(|&i| model.predict(&samples[i].features))
            .collect();
        let evaluation = evaluation::evaluate(&actual, &predicted);

        debug!(
            train_size = train_samples.len(),
            test_size = actual.len(),
            accuracy = evaluation.accuracy,
            "Trained quality classifier"
        );

        self.model = Some(model);
        Ok(evaluation)
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ScreenerError> {
        let model = self.model.as_ref().ok_or(ScreenerError::UntrainedModel)?;

        let posteriors = model.predict_proba(features);
        let mut probabilities = ClassProbabilities::zeroed();
        for (&status, &posterior) in model.classes.iter().zip(posteriors.iter()) {
            probabilities.set(status, posterior);
        }

        let best = argmax(&posteriors);
        Ok(Prediction {
            status: model.classes[best],
            confidence: posteriors[best],
            probabilities,
        })
    }

    /// Writes the fitted parameters as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScreenerError> {
        let model = self.model.as_ref().ok_or(ScreenerError::UntrainedModel)?;
        let bytes = serde_json::to_vec(model)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Restores fitted parameters saved by [`QualityClassifier::save`].
    /// A missing file is a normal cold start, not an error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<ArtifactLoad, ScreenerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(ArtifactLoad::NotFound);
        }

        let bytes = fs::read(path)?;
        let model: GaussianNb = serde_json::from_slice(&bytes)?;
        self.model = Some(model);
        Ok(ArtifactLoad::Loaded)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
