use thiserror::Error;

/// Engine-level error type.
/// Scoring paths never produce these; they come from classifier misuse,
/// artifact persistence, and invalid injected configuration.
#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("Model has not been trained")]
    UntrainedModel,

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Invalid experience pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Artifact I/O error: {0}")]
    ArtifactIo(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    CorruptArtifact(#[from] serde_json::Error),
}
