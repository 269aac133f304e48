//! Error types for the Periplus personalization engine
//!
//! This module provides structured error definitions using thiserror, with
//! anyhow used for propagation at the binary boundary.

use thiserror::Error;

/// Main error type for Periplus operations
#[derive(Error, Debug)]
pub enum PeriplusError {
    /// I/O error (store file unreadable, directory creation failed, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (persisted usage data unreadable or unwritable)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Storage backend unavailable or misbehaving
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Periplus operations
pub type Result<T> = std::result::Result<T, PeriplusError>;

/// Convert anyhow::Error to PeriplusError
impl From<anyhow::Error> for PeriplusError {
    fn from(err: anyhow::Error) -> Self {
        PeriplusError::Other(err.to_string())
    }
}
