//! Liveness check

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
///
/// Never touches the hub, so it stays green while the hub is down.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
