//! Application state for the dashboard API

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hadash_core::SwitchBackend;

/// Values exposed verbatim by `GET /api/config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Switch entity the dashboard controls
    pub entity_id: String,
    /// Camera stream URL, passed through to the browser
    pub camera_mjpeg_url: String,
    /// Hub base URL, as configured
    pub ha_base: String,
}

/// Application state shared across all handlers.
///
/// Everything in here is read-only after startup; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn SwitchBackend>,
    dashboard: Arc<DashboardConfig>,
    web_root: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Create a new AppState with the given backend and dashboard config
    pub fn new(backend: Arc<dyn SwitchBackend>, dashboard: DashboardConfig) -> Self {
        Self {
            backend,
            dashboard: Arc::new(dashboard),
            web_root: None,
        }
    }

    /// Serve static dashboard assets from `web_root`
    pub fn with_web_root(mut self, web_root: impl Into<PathBuf>) -> Self {
        self.web_root = Some(Arc::new(web_root.into()));
        self
    }

    /// Get the switch backend
    pub fn backend(&self) -> &Arc<dyn SwitchBackend> {
        &self.backend
    }

    /// Get the dashboard config
    pub fn dashboard(&self) -> &DashboardConfig {
        &self.dashboard
    }

    /// Get the static asset directory, if any
    pub fn web_root(&self) -> Option<&Path> {
        self.web_root.as_deref().map(PathBuf::as_path)
    }
}
