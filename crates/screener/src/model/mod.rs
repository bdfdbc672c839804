// Quality model: feature extraction, synthetic data, training, inference.

pub mod classifier;
pub mod evaluation;
pub mod features;
pub mod synthetic;
