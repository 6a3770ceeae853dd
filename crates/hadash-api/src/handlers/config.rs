//! Dashboard configuration handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub entity_id: String,
    pub camera_mjpeg_url: String,
    pub ha_base: String,
}

/// GET /api/config
///
/// Values are returned exactly as configured. The camera URL is handed to
/// the browser and never fetched by the gateway.
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let dashboard = state.dashboard();
    Json(ConfigResponse {
        entity_id: dashboard.entity_id.clone(),
        camera_mjpeg_url: dashboard.camera_mjpeg_url.clone(),
        ha_base: dashboard.ha_base.clone(),
    })
}
