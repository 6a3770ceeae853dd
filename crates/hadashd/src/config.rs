//! Configuration for hadashd
//!
//! Values come from three places, highest priority first: command-line flags
//! (or their environment variables), an optional TOML file, built-in
//! defaults. The result is resolved once at startup and never changes.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_HA_BASE_URL: &str = "http://localhost:8123";
pub const DEFAULT_ENTITY_ID: &str = "switch.pump_plug";
pub const DEFAULT_CAMERA_MJPEG_URL: &str = "http://localhost:8081/?action=stream";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_WEB_ROOT: &str = "wwwroot";

#[derive(Parser, Debug, Default)]
#[command(name = "hadashd")]
#[command(author, version, about = "Pump dashboard gateway for Home Assistant")]
pub struct Cli {
    /// Home Assistant base URL
    #[arg(long, env = "HA_BASE_URL")]
    pub ha_base_url: Option<String>,

    /// Home Assistant long-lived access token
    #[arg(long, env = "HA_TOKEN", hide_env_values = true)]
    pub ha_token: Option<String>,

    /// Switch entity to control
    #[arg(long, env = "HA_SWITCH_ENTITY")]
    pub entity: Option<String>,

    /// MJPEG camera stream URL handed to the dashboard
    #[arg(long, env = "CAMERA_MJPEG_URL")]
    pub camera_url: Option<String>,

    /// Address to listen on
    #[arg(short, long, env = "HADASH_LISTEN")]
    pub listen: Option<String>,

    /// Directory holding the dashboard bundle
    #[arg(short, long, env = "HADASH_WEB_ROOT")]
    pub web_root: Option<PathBuf>,

    /// Timeout for hub requests, in seconds (default: wait indefinitely)
    #[arg(long, env = "HADASH_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Configuration file path (TOML)
    #[arg(short, long, env = "HADASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "HADASH_LOG_JSON")]
    pub log_json: bool,
}

/// `[hub]` section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HubSection {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub entity_id: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// `[camera]` section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraSection {
    pub mjpeg_url: Option<String>,
}

/// `[server]` section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub listen: Option<String>,
    pub web_root: Option<PathBuf>,
}

/// Contents of the optional TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub hub: HubSection,
    #[serde(default)]
    pub camera: CameraSection,
    #[serde(default)]
    pub server: ServerSection,
}

impl FileConfig {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Fully resolved gateway configuration, immutable for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub upstream_base_url: String,
    pub auth_token: Option<String>,
    pub entity_id: String,
    pub camera_stream_url: String,
    pub listen: SocketAddr,
    pub web_root: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Resolve the configuration, reading the config file named by `cli` if any
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load_from(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Merge CLI arguments over config file values, then apply defaults
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let upstream_base_url = cli
            .ha_base_url
            .clone()
            .or(file.hub.base_url)
            .unwrap_or_else(|| DEFAULT_HA_BASE_URL.to_string());
        url::Url::parse(&upstream_base_url)
            .with_context(|| format!("Invalid Home Assistant URL: {}", upstream_base_url))?;

        // An empty token means "no auth", same as an absent one
        let auth_token = cli
            .ha_token
            .clone()
            .or(file.hub.token)
            .filter(|t| !t.trim().is_empty());

        let entity_id = cli
            .entity
            .clone()
            .or(file.hub.entity_id)
            .unwrap_or_else(|| DEFAULT_ENTITY_ID.to_string());

        let camera_stream_url = cli
            .camera_url
            .clone()
            .or(file.camera.mjpeg_url)
            .unwrap_or_else(|| DEFAULT_CAMERA_MJPEG_URL.to_string());

        let listen = cli
            .listen
            .clone()
            .or(file.server.listen)
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen: SocketAddr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen))?;

        let web_root = cli
            .web_root
            .clone()
            .or(file.server.web_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_ROOT));

        let request_timeout = cli
            .request_timeout
            .or(file.hub.request_timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            upstream_base_url,
            auth_token,
            entity_id,
            camera_stream_url,
            listen,
            web_root,
            request_timeout,
        })
    }
}
