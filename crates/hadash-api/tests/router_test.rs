//! Router tests for hadash-api
//!
//! Serves the router over a real socket with a scripted backend, so the
//! handlers, error rendering and static fallback are all exercised together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hadash_api::{create_router, AppState, DashboardConfig};
use hadash_client::testing::TestServer;
use hadash_core::{BackendError, BackendResult, EntityState, SwitchBackend};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// =============================================================================
// Scripted Backend
// =============================================================================

/// What the scripted backend does on each call
#[derive(Clone, Copy)]
enum Script {
    Ok,
    Upstream500,
    Malformed,
    Unreachable,
}

struct ScriptedBackend {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    fn run_script(&self) -> BackendResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Ok => Ok(()),
            Script::Upstream500 => Err(BackendError::upstream(500, "Internal Server Error")),
            Script::Malformed => Err(BackendError::MalformedResponse(
                "missing field `state`".to_string(),
            )),
            Script::Unreachable => Err(BackendError::Transport("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl SwitchBackend for ScriptedBackend {
    async fn read_state(&self) -> BackendResult<EntityState> {
        self.run_script()?;
        Ok(EntityState::new(
            "switch.pump_plug",
            Some("Pump".to_string()),
            "on",
        ))
    }

    async fn toggle(&self) -> BackendResult<()> {
        self.run_script()
    }
}

fn dashboard() -> DashboardConfig {
    DashboardConfig {
        entity_id: "switch.pump_plug".to_string(),
        camera_mjpeg_url: "http://cam.local:8081/?action=stream".to_string(),
        ha_base: "http://hass.local:8123".to_string(),
    }
}

async fn serve(state: AppState) -> (TestServer, reqwest::Client) {
    let server = TestServer::start(create_router(state)).await.unwrap();
    (server, reqwest::Client::new())
}

async fn serve_script(script: Script) -> (TestServer, reqwest::Client, Arc<ScriptedBackend>) {
    let backend = ScriptedBackend::new(script);
    let (server, http) = serve(AppState::new(backend.clone(), dashboard())).await;
    (server, http, backend)
}

// =============================================================================
// Static endpoints
// =============================================================================

#[tokio::test]
async fn test_health_ignores_backend() {
    let (server, http, backend) = serve_script(Script::Unreachable).await;

    let resp = http
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({"status": "ok"}));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_config_is_verbatim() {
    let (server, http, _) = serve_script(Script::Ok).await;

    let body: Value = http
        .get(format!("{}/api/config", server.base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({
            "entityId": "switch.pump_plug",
            "cameraMjpegUrl": "http://cam.local:8081/?action=stream",
            "haBase": "http://hass.local:8123"
        })
    );
}

// =============================================================================
// Entity endpoints
// =============================================================================

#[tokio::test]
async fn test_state_success() {
    let (server, http, _) = serve_script(Script::Ok).await;

    let resp = http
        .get(format!("{}/api/state", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({"entityId": "switch.pump_plug", "name": "Pump", "state": "on"})
    );
}

#[tokio::test]
async fn test_toggle_success() {
    let (server, http, backend) = serve_script(Script::Ok).await;

    let resp = http
        .post(format!("{}/api/toggle", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({"ok": true}));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_upstream_500_is_problem_response() {
    let (server, http, _) = serve_script(Script::Upstream500).await;

    let state = http
        .get(format!("{}/api/state", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(state.status(), 500);
    assert_eq!(
        state.headers()["content-type"].to_str().unwrap(),
        "application/problem+json"
    );
    let body: Value = state.json().await.unwrap();
    assert_eq!(body["status"], 500);
    assert_eq!(
        body["detail"],
        "Failed to get state from Home Assistant: 500 Internal Server Error"
    );

    let toggle = http
        .post(format!("{}/api/toggle", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(toggle.status(), 500);
    let body: Value = toggle.json().await.unwrap();
    assert_eq!(
        body["detail"],
        "Failed to toggle switch: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn test_malformed_upstream_is_500() {
    let (server, http, _) = serve_script(Script::Malformed).await;

    let resp = http
        .get(format!("{}/api/state", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_unreachable_hub_is_503() {
    let (server, http, _) = serve_script(Script::Unreachable).await;

    let resp = http
        .post(format!("{}/api/toggle", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 503);
}

#[tokio::test]
async fn test_state_rejects_post() {
    let (server, http, _) = serve_script(Script::Ok).await;

    let resp = http
        .post(format!("{}/api/state", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 405);
}

// =============================================================================
// Static assets
// =============================================================================

#[tokio::test]
async fn test_static_index_is_default_document() {
    let web_root = tempfile::tempdir().unwrap();
    std::fs::write(web_root.path().join("index.html"), "<h1>pump</h1>").unwrap();
    std::fs::write(web_root.path().join("app.js"), "console.log('hi')").unwrap();

    let state = AppState::new(ScriptedBackend::new(Script::Ok), dashboard())
        .with_web_root(web_root.path());
    let (server, http) = serve(state).await;

    let index = http.get(server.base_url()).send().await.unwrap();
    assert_eq!(index.status(), 200);
    assert_eq!(index.text().await.unwrap(), "<h1>pump</h1>");

    let script = http
        .get(format!("{}/app.js", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(script.status(), 200);
    assert!(script.headers()["content-type"]
        .to_str()
        .unwrap()
        .contains("javascript"));

    let missing = http
        .get(format!("{}/nope.css", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn test_no_web_root_means_404() {
    let (server, http, _) = serve_script(Script::Ok).await;

    let resp = http.get(server.base_url()).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}
