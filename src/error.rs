//! Error types for the Biblioteka client

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main client error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received (connection refused, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error status; `body` is the raw payload
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: Value },

    /// Write rejected by the backend, carrying the JSON-encoded payload
    #[error("{0}")]
    Rejected(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Wrap a failed write the way `create` surfaces it: the server payload
    /// becomes the JSON-encoded error text. An empty payload gives an empty
    /// message.
    pub fn into_rejected(self) -> Self {
        match self {
            ApiError::Status { body: Value::Null, .. } => ApiError::Rejected(String::new()),
            ApiError::Status { body, .. } => ApiError::Rejected(body.to_string()),
            other => other,
        }
    }

    /// HTTP status of the failed call, if a response was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The `userMessage` field of the server payload, when present
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => user_message(body),
            ApiError::Rejected(text) => serde_json::from_str::<Value>(text)
                .ok()
                .as_ref()
                .and_then(user_message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Extract the user-facing message the backend attaches to error payloads
pub fn user_message(body: &Value) -> Option<String> {
    match body.get("userMessage")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
