//! Wire types for the Home Assistant REST API

use serde::{Deserialize, Serialize};

/// State object returned by `GET /api/states/<entity_id>`.
///
/// `state` and the `attributes` object are required. The remaining fields
/// are optional so that trimmed-down hubs still parse.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub state: String,
    pub attributes: HubAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl HubState {
    /// Friendly name from the attributes, if the hub set one
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.friendly_name.as_deref()
    }
}

/// Entity attributes. `friendly_name` is the only one the gateway reads;
/// the rest are kept for debugging.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /api/services/<domain>/<service>` targeting one entity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceCall {
    pub entity_id: String,
}

impl ServiceCall {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
        }
    }
}
