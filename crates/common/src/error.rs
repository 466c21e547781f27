//! Error types for PizzaSim

use thiserror::Error;

/// Result type alias using the PizzaSim Error
pub type Result<T> = std::result::Result<T, Error>;

/// PizzaSim error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid route pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Route registration failed for {pattern}: {reason}")]
    RouteRegistration { pattern: String, reason: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Request body missing or not JSON: {0}")]
    InvalidBody(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
