//! Error types for the rinse crates.

use thiserror::Error;

/// Errors that can occur in rinse operations.
#[derive(Error, Debug)]
pub enum RinseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for rinse operations.
pub type RinseResult<T> = Result<T, RinseError>;
