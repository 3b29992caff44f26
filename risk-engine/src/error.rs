//! Error types for risk engine

use thiserror::Error;

/// Risk engine error
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// Geolocation lookup failed
    #[error("Geolocation lookup failed: {0}")]
    Geolocation(String),

    /// Device signature validation failed
    #[error("Signature validation failed: {0}")]
    SignatureValidation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
