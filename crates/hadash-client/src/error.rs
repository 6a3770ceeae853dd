//! Error types for hub client operations

use thiserror::Error;

/// Result type alias for hub client operations
pub type Result<T> = std::result::Result<T, HubClientError>;

/// Errors that can occur while talking to the hub
#[derive(Error, Debug)]
pub enum HubClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Token contains bytes that cannot go into a header
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    /// Hub returned a non-success status
    #[error("Hub error {status}: {reason}")]
    StatusError { status: u16, reason: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl HubClientError {
    /// Create a status error from status code and reason phrase
    pub fn status_error(status: u16, reason: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            reason: reason.into(),
        }
    }

    /// Classify a transport-level reqwest error
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::HttpError(err)
        }
    }
}
