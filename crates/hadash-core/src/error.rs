//! Common error types for switch backends

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur in switch backends
#[derive(Debug, Error)]
pub enum BackendError {
    /// The hub answered with a non-success HTTP status
    #[error("Hub returned {status} {reason}")]
    Upstream {
        /// HTTP status code returned by the hub
        status: u16,
        /// Reason phrase the hub sent, or the canonical one (may be empty)
        reason: String,
    },

    /// The hub answered 2xx but the body was not the JSON we expected
    #[error("Malformed hub response: {0}")]
    MalformedResponse(String),

    /// Transport/communication error (connection refused, DNS, IO)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Timeout waiting for the hub
    #[error("Hub request timed out")]
    Timeout,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create an upstream error from a status code and reason phrase
    pub fn upstream(status: u16, reason: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            reason: reason.into(),
        }
    }
}
