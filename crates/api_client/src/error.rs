//! Client-facing error types for backend calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProblem {
    /// Short error title.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-facing message, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Request path that produced the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl std::fmt::Display for ApiProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.status,
            self.detail.as_deref().unwrap_or(&self.title)
        )
    }
}

/// Errors produced by [`crate::LendingApi`] calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a structured error body.
    #[error("backend error: {0}")]
    Api(ApiProblem),

    /// The backend answered with a non-success status and no parseable
    /// error body.
    #[error("server returned status {0}")]
    Status(u16),

    /// A response body did not match the expected shape.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ClientError {
    /// Maps this failure to the text shown to the user: the backend's
    /// `detail` when present, otherwise the provided fallback message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api(problem) => problem
                .detail
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

/// Result type for backend calls.
pub type ClientResult<T> = Result<T, ClientError>;
