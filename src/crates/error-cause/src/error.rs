//! Error types for the ambient parts of the crate.
//!
//! Traversal never fails; these errors only surface from configuration
//! loading and from the serialization step before it is downgraded to a
//! fallback marker.

use thiserror::Error;

/// Result type for fallible error-cause operations.
pub type Result<T> = std::result::Result<T, CauseError>;

/// Errors that can occur outside of chain traversal.
#[derive(Debug, Error)]
pub enum CauseError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A non-error cause could not be rendered.
    #[error("Failed to stringify value: {0}")]
    StringifyError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Environment variable error.
    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),
}

impl From<serde_json::Error> for CauseError {
    fn from(err: serde_json::Error) -> Self {
        CauseError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CauseError {
    fn from(err: serde_yaml::Error) -> Self {
        CauseError::SerializationError(err.to_string())
    }
}
