//! Error types for textquery.

use thiserror::Error;

/// Result type alias using textquery's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for textquery operations.
///
/// Query compilation itself is a pure transform and raises no errors of its
/// own; these variants exist for the execution-scope seam and for downstream
/// crates that embed the compiler.
#[derive(Error, Debug)]
pub enum Error {
    /// Search backend rejected or failed to execute a query
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
