//! Switch entity handlers (state read and toggle)

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use hadash_core::EntityState;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ok: bool,
}

/// GET /api/state
pub async fn get_state(State(state): State<AppState>) -> Result<Json<EntityState>, ApiError> {
    let entity = state
        .backend()
        .read_state()
        .await
        .map_err(|e| ApiError::from_backend("Failed to get state from Home Assistant", e))?;

    Ok(Json(entity))
}

/// POST /api/toggle
pub async fn toggle(State(state): State<AppState>) -> Result<Json<ToggleResponse>, ApiError> {
    state
        .backend()
        .toggle()
        .await
        .map_err(|e| ApiError::from_backend("Failed to toggle switch", e))?;

    Ok(Json(ToggleResponse { ok: true }))
}
