//! API error types and conversions
//!
//! Errors are rendered as RFC 7807 problem documents.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hadash_core::BackendError;
use serde::Serialize;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Detail returned for failures whose cause stays in the logs
const GENERIC_DETAIL: &str = "An error occurred while processing your request.";

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error carrying the hub's status in the detail
    Upstream(String),
    /// 503 Service Unavailable (hub unreachable)
    ServiceUnavailable(String),
    /// 504 Gateway Timeout
    GatewayTimeout(String),
    /// 500 Internal Server Error. The message is logged, never returned.
    Internal(String),
}

/// Problem details response body
#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: &'static str,
    title: &'static str,
    status: u16,
    detail: String,
}

impl ApiError {
    /// Convert a backend error, prefixing upstream failures with what the
    /// gateway was trying to do (e.g. "Failed to toggle switch: 500 ...").
    pub fn from_backend(context: &str, err: BackendError) -> Self {
        match err {
            BackendError::Upstream { status, reason } => {
                ApiError::Upstream(format!("{}: {} {}", context, status, reason))
            }
            BackendError::MalformedResponse(msg) => ApiError::Internal(msg),
            BackendError::Transport(msg) => {
                ApiError::ServiceUnavailable(format!("Hub unreachable: {}", msg))
            }
            BackendError::Timeout => ApiError::GatewayTimeout("Hub request timed out".to_string()),
            BackendError::Internal(msg) => ApiError::Internal(msg),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match self {
            ApiError::Internal(message) => {
                tracing::error!(%message, "Unhandled request failure");
                GENERIC_DETAIL.to_string()
            }
            ApiError::Upstream(message)
            | ApiError::ServiceUnavailable(message)
            | ApiError::GatewayTimeout(message) => {
                tracing::error!(status = status.as_u16(), %message, "Upstream error");
                message
            }
        };

        let body = Json(ProblemDetails {
            problem_type: "about:blank",
            title: status.canonical_reason().unwrap_or("Error"),
            status: status.as_u16(),
            detail,
        });

        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            body,
        )
            .into_response()
    }
}
