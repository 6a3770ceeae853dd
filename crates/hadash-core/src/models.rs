//! Domain models exchanged between backends and the API layer

use serde::{Deserialize, Serialize};

/// Current state of the configured entity, as shown on the dashboard.
///
/// Built per request from the hub's answer and dropped once the response
/// is written. Serializes as `{"entityId", "name", "state"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityState {
    /// Hub entity identifier (e.g., "switch.pump_plug")
    pub entity_id: String,
    /// Human-readable name, falls back to the entity id
    #[serde(rename = "name")]
    pub display_name: String,
    /// Raw hub state string (e.g., "on", "off", "unavailable")
    pub state: String,
}

impl EntityState {
    /// Build an entity state, using the entity id as the display name when
    /// the hub did not supply a friendly name.
    pub fn new(
        entity_id: impl Into<String>,
        friendly_name: Option<String>,
        state: impl Into<String>,
    ) -> Self {
        let entity_id = entity_id.into();
        let display_name = friendly_name.unwrap_or_else(|| entity_id.clone());
        Self {
            entity_id,
            display_name,
            state: state.into(),
        }
    }
}
