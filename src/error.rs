//! Error model used by worldstate client operations.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorldstateError>;

/// Represents failure conditions raised while fetching a worldstate document:
/// HTTP errors with status and body, timeouts, network issues, decode
/// problems and other unexpected errors. Per-category normalization never
/// produces an error; malformed categories degrade to empty data instead.
#[derive(Debug, Error)]
pub enum WorldstateError {
    #[error("http {status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl WorldstateError {
    /// Constructs an HTTP error variant from a status and response body.
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        WorldstateError::Http {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for WorldstateError {
    /// Converts reqwest errors into semantic WorldstateError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WorldstateError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            WorldstateError::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            WorldstateError::Network(err.to_string())
        } else {
            WorldstateError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WorldstateError {
    /// Converts serde_json decode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        WorldstateError::Serialization(err.to_string())
    }
}
