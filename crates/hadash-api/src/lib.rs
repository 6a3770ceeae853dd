//! hadash-api - REST API layer for the dashboard gateway
//!
//! Serves the dashboard's `/api/*` endpoints on top of a [`SwitchBackend`]
//! and, optionally, the dashboard bundle itself from a document root.
//!
//! # Usage
//!
//! ```ignore
//! use hadash_api::{create_router, AppState, DashboardConfig};
//! use hadash_proxy::HubProxyBackend;
//!
//! let backend = HubProxyBackend::new(client, "switch.pump_plug");
//! let state = AppState::new(Arc::new(backend), dashboard).with_web_root("wwwroot");
//! let router = create_router(state);
//! ```
//!
//! [`SwitchBackend`]: hadash_core::SwitchBackend

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, DashboardConfig};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the dashboard router with the given application state.
///
/// Paths outside `/api` fall through to the static asset directory when one
/// is configured, and to a plain 404 otherwise.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/state", get(handlers::entity::get_state))
        .route("/api/toggle", post(handlers::entity::toggle));

    if let Some(web_root) = state.web_root() {
        tracing::debug!(web_root = %web_root.display(), "Serving static assets");
        router = router.fallback_service(ServeDir::new(web_root));
    }

    router
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
