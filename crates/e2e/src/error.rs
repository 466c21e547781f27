//! Error types for the E2E harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Mock setup failed: {0}")]
    Setup(#[from] pizzasim_common::Error),

    #[error("No route answered {method} {url}")]
    Unrouted { method: String, url: String },

    #[error("Unexpected status {status} for {context}: {body}")]
    UnexpectedStatus {
        status: u16,
        context: String,
        body: String,
    },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Scenario failed at {step}: {reason}")]
    Scenario { step: String, reason: String },

    #[error("Load task panicked: {0}")]
    Join(String),
}

pub type E2eResult<T> = Result<T, E2eError>;
