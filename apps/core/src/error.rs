use std::io;
use thiserror::Error;

/// Router-wide error type covering training, classification and bootstrap failures.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The intent set handed to the trainer is malformed (empty set, intent
    /// without examples, duplicate labels). The published table is left untouched.
    #[error("Invalid training data: {0}")]
    InvalidTrainingData(String),

    /// The embedding accessor failed, timed out or returned an unusable vector.
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// Two vectors that must share the embedding dimension do not.
    /// Raised when the provider changes output shape between training and inference.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The query text was rejected before any embedding call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classification was requested before the first successful training pass.
    #[error("Intent router is not ready: no centroid table has been trained yet")]
    NotReady,

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for RouterError {
    fn clone(&self) -> Self {
        match self {
            RouterError::InvalidTrainingData(s) => RouterError::InvalidTrainingData(s.clone()),
            RouterError::EmbeddingUnavailable(s) => RouterError::EmbeddingUnavailable(s.clone()),
            RouterError::DimensionMismatch { expected, actual } => RouterError::DimensionMismatch {
                expected: *expected,
                actual: *actual,
            },
            RouterError::InvalidInput(s) => RouterError::InvalidInput(s.clone()),
            RouterError::NotReady => RouterError::NotReady,
            RouterError::Config(s) => RouterError::Config(s.clone()),
            RouterError::Io(e) => RouterError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<tokio::time::error::Elapsed> for RouterError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        RouterError::EmbeddingUnavailable(format!("Embedding call timed out: {}", err))
    }
}

impl From<reqwest::Error> for RouterError {
    fn from(err: reqwest::Error) -> Self {
        RouterError::EmbeddingUnavailable(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::InvalidTrainingData(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for RouterError {
    fn from(err: validator::ValidationErrors) -> Self {
        RouterError::InvalidTrainingData(format!("Validation errors: {}", err))
    }
}

impl From<url::ParseError> for RouterError {
    fn from(err: url::ParseError) -> Self {
        RouterError::Config(format!("URL parse error: {}", err))
    }
}

impl From<tokio::task::JoinError> for RouterError {
    fn from(err: tokio::task::JoinError) -> Self {
        RouterError::EmbeddingUnavailable(format!("Embedding task failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
