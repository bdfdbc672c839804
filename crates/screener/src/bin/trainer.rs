//! Trains the quality classifier on synthetic data and saves the artifact.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener::config::TrainerConfig;
use screener::model::classifier::QualityClassifier;
use screener::model::synthetic::generate_training_set;

fn main() -> Result<()> {
    let config = TrainerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        samples = config.samples,
        seed = config.seed,
        "Generating synthetic training data"
    );
    let samples = generate_training_set(config.samples, config.seed);

    let mut classifier = QualityClassifier::new();
    let evaluation = classifier.train(&samples)?;

    info!("Model accuracy: {:.2}", evaluation.accuracy);
    for class in &evaluation.classes {
        info!(
            status = %class.status,
            precision = class.precision,
            recall = class.recall,
            f1 = class.f1,
            support = class.support,
            "Class report"
        );
    }

    let model_path = Path::new(&config.model_path);
    if let Some(parent) = model_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    classifier.save(model_path)?;
    info!("Model trained and saved to {}", config.model_path);

    Ok(())
}
