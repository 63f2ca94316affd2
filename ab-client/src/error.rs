//! Client error types
//!
//! Every variant displays as the bare user-facing message, so callers that
//! only show `err.to_string()` get the same text the backend sent.

use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when a failure carries nothing more specific
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<Map<String, Value>>,
    },

    /// Network-level failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// In-process dispatch failure
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body is not the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request body could not be encoded
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    /// Payload rejected before sending
    #[error("{0}")]
    Validation(String),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ClientError {
    /// Error for a non-2xx response that carried no usable error body
    pub fn from_status(status: http::StatusCode) -> Self {
        Self::Api {
            status: status.as_u16(),
            message: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            ),
            code: Some(status.as_u16().to_string()),
            details: None,
        }
    }

    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The message shown to users
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
