//! Error types for subheat-core

use thiserror::Error;

/// Main error type for the subheat-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error for a record source
    #[error("parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Period selector that is neither "current" nor a year
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}

/// Result type alias for subheat-core
pub type Result<T> = std::result::Result<T, Error>;
