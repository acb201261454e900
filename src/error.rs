//! Error types for entroscan.
//!
//! The detection engine itself is nearly infallible: estimators never fail
//! and the classifiers only reject malformed input. The remaining variants
//! belong to the reading, configuration and pattern-building layers.

use thiserror::Error;

/// Main error type for entroscan operations.
#[derive(Debug, Error)]
pub enum EntroscanError {
    /// Caller supplied input the engine cannot evaluate
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured read cap
    #[error("File too large: {size} bytes (limit: {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// Marker automaton could not be built from the configured patterns
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration rejected during validation or loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for entroscan operations
pub type Result<T> = std::result::Result<T, EntroscanError>;

impl From<aho_corasick::BuildError> for EntroscanError {
    fn from(err: aho_corasick::BuildError) -> Self {
        EntroscanError::Pattern(err.to_string())
    }
}

impl From<serde_json::Error> for EntroscanError {
    fn from(err: serde_json::Error) -> Self {
        EntroscanError::Serialization(err.to_string())
    }
}

/// Convert entroscan errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<EntroscanError> for pyo3::PyErr {
    fn from(err: EntroscanError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            EntroscanError::Io(e) => PyIOError::new_err(e.to_string()),
            EntroscanError::InvalidInput(msg) | EntroscanError::Config(msg) => {
                PyValueError::new_err(msg)
            }
            _ => PyException::new_err(err.to_string()),
        }
    }
}
