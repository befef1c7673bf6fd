//! Error handling for the access engine
//!
//! This module defines all error types used throughout the crate.
//!
//! Denial of access is deliberately *not* represented here: a denied area is
//! a normal control-flow outcome (a redirect [`Decision`]), never an error.
//! `PainelError` covers the failures around the engine: configuration that
//! cannot be loaded or validated, and identity collaborators that misbehave.
//!
//! [`Decision`]: crate::access::Decision

use thiserror::Error;

/// Result type alias for the access engine
pub type Result<T> = std::result::Result<T, PainelError>;

/// Main error type for the access engine
#[derive(Error, Debug)]
pub enum PainelError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Identity provider errors
    #[error("Identity provider error: {0}")]
    Identity(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Helper functions for creating specific errors
impl PainelError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn identity<S: Into<String>>(message: S) -> Self {
        Self::Identity(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
