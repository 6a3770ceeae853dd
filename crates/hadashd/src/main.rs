//! hadashd - pump dashboard gateway
//!
//! Serves the dashboard bundle and proxies its API calls to Home Assistant.
//!
//! Usage:
//!   hadashd [OPTIONS]
//!
//! Every option can also be given through its environment variable
//! (`HA_BASE_URL`, `HA_TOKEN`, `HA_SWITCH_ENTITY`, `CAMERA_MJPEG_URL`, ...)
//! or the TOML file named by `--config`. See `hadashd --help`.

mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hadash_api::{create_router, AppState, DashboardConfig};
use hadash_client::HubClient;
use hadash_core::SwitchBackend;
use hadash_proxy::HubProxyBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, GatewayConfig};

const DEFAULT_LOG_FILTER: &str =
    "hadashd=info,hadash_api=info,hadash_proxy=info,hadash_client=info,tower_http=info";

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_json);

    tracing::info!("Starting hadashd");

    let config = GatewayConfig::resolve(&cli)?;
    tracing::info!(
        ha_base = %config.upstream_base_url,
        entity_id = %config.entity_id,
        auth = config.auth_token.is_some(),
        timeout = ?config.request_timeout,
        "Home Assistant upstream"
    );
    if config.auth_token.is_none() {
        tracing::warn!("No HA_TOKEN configured, hub requests will be unauthenticated");
    }

    let app = build_app(&config)?;

    tracing::info!("Listening on http://{}", config.listen);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

/// Wire the hub client, proxy backend and router together
fn build_app(config: &GatewayConfig) -> anyhow::Result<axum::Router> {
    let client = HubClient::with_config(
        &config.upstream_base_url,
        config.auth_token.as_deref(),
        config.request_timeout,
    )
    .context("Failed to create Home Assistant client")?;

    let backend: Arc<dyn SwitchBackend> =
        Arc::new(HubProxyBackend::new(client, config.entity_id.clone()));

    let dashboard = DashboardConfig {
        entity_id: config.entity_id.clone(),
        camera_mjpeg_url: config.camera_stream_url.clone(),
        ha_base: config.upstream_base_url.clone(),
    };

    let mut state = AppState::new(backend, dashboard);
    if config.web_root.is_dir() {
        tracing::info!("Serving dashboard from {}", config.web_root.display());
        state = state.with_web_root(config.web_root.clone());
    } else {
        tracing::warn!(
            "Dashboard directory {} not found, serving API only",
            config.web_root.display()
        );
    }

    Ok(create_router(state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
