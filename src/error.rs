//! Error types for the rank core

use thiserror::Error;

/// Main error type for the rank core
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Insufficient data: expected at least {expected} rows, found {found}")]
    InsufficientData { expected: usize, found: usize },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(feature = "python")]
impl From<RankError> for pyo3::PyErr {
    fn from(err: RankError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyConnectionError, PyRuntimeError, PyValueError};

        match err {
            RankError::Configuration(msg) => {
                PyValueError::new_err(format!("Configuration error: {}", msg))
            }
            RankError::Deserialization(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            RankError::Fetch { url, reason } => {
                PyConnectionError::new_err(format!("Fetch failed for {}: {}", url, reason))
            }
            other => PyRuntimeError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the rank core
pub type Result<T> = std::result::Result<T, RankError>;
