//! Error types
//!
//! Errors raised by the configuration, tool, and binary layers. The feeding
//! calculator itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PawfeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown weight unit: {0}")]
    UnknownUnit(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Pawfeed operations
pub type PawfeedResult<T> = Result<T, PawfeedError>;
