use anyhow::{Context, Result};

/// Trainer configuration loaded from environment variables.
/// Every variable has a default, so a bare environment works.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub model_path: String,
    pub samples: usize,
    pub seed: u64,
    pub rust_log: String,
}

impl TrainerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(TrainerConfig {
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/quality_model.json".to_string()),
            samples: std::env::var("TRAINING_SAMPLES")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<usize>()
                .context("TRAINING_SAMPLES must be a non-negative integer")?,
            seed: std::env::var("TRAINING_SEED")
                .unwrap_or_else(|_| "42".to_string())
                .parse::<u64>()
                .context("TRAINING_SEED must be an unsigned integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
