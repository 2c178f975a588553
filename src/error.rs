//! Error types for wallet API calls
//!
//! Every failure is surfaced to the direct caller; the client never retries
//! or falls back internally. `is_retryable` only classifies what a caller
//! could reasonably try again.

use thiserror::Error;

/// Error type covering the full request/response exchange
#[derive(Debug, Error)]
pub enum WalletClientError {
    /// The wallet node answered with a non-2xx status
    ///
    /// Carries the status code and the raw response body text so callers
    /// can surface the server's own error detail.
    #[error("wallet API returned HTTP {status}: {body}")]
    HttpRequest {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// HTTP succeeded but the JSON body did not match the expected shape
    ///
    /// Missing `data` member, missing required field, or wrong field type.
    #[error("malformed response from {endpoint}: {reason}")]
    ResponseSchema {
        /// Endpoint path that produced the response
        endpoint: String,
        /// What failed to parse
        reason: String,
    },

    /// The request was rejected before any network call was attempted
    #[error("invalid request: {0}")]
    Validation(String),

    /// Connection, timeout, or body-read failure below the HTTP layer
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WalletClientError {
    /// Check if retrying the call might succeed
    ///
    /// The client itself never retries; this is advisory for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::HttpRequest { status, .. } => (500..600).contains(status),
            Self::ResponseSchema { .. } => false,
            Self::Validation(_) => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::HttpRequest { .. } => "http",
            Self::ResponseSchema { .. } => "schema",
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
        }
    }

    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    /// Create a schema error for a specific endpoint
    pub fn schema(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResponseSchema {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}
