use std::path::PathBuf;

use thiserror::Error;

use medstock_core::DomainError;

/// Failure while running inference on a loaded policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid policy input: {0}")]
    InvalidInput(String),

    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

impl From<DomainError> for PolicyError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DimensionMismatch { expected, actual } => {
                PolicyError::DimensionMismatch { expected, actual }
            }
            other => PolicyError::InvalidInput(other.to_string()),
        }
    }
}

/// Failure while loading a policy artifact from disk.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read policy artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid policy artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
