//! HubProxyBackend - SwitchBackend that proxies to a Home Assistant hub

use async_trait::async_trait;
use hadash_client::{HubClient, HubClientError};
use hadash_core::{BackendError, BackendResult, EntityState, SwitchBackend};

/// A `SwitchBackend` bound to one switch entity on a Home Assistant hub.
///
/// Every call turns into exactly one upstream request. Nothing is cached and
/// failed calls are not retried.
pub struct HubProxyBackend {
    client: HubClient,
    entity_id: String,
}

impl HubProxyBackend {
    /// Create a proxy for `entity_id` on the hub reachable through `client`.
    pub fn new(client: HubClient, entity_id: impl Into<String>) -> Self {
        Self {
            client,
            entity_id: entity_id.into(),
        }
    }

    /// Map a HubClientError to a BackendError
    fn map_err(e: HubClientError) -> BackendError {
        match e {
            HubClientError::StatusError { status, reason } => BackendError::upstream(status, reason),
            HubClientError::ParseError(m) => BackendError::MalformedResponse(m),
            HubClientError::Timeout => BackendError::Timeout,
            HubClientError::ConnectionFailed(m) => BackendError::Transport(m),
            HubClientError::HttpError(e) => BackendError::Transport(e.to_string()),
            HubClientError::IoError(e) => BackendError::Transport(e.to_string()),
            other => BackendError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
impl SwitchBackend for HubProxyBackend {
    async fn read_state(&self) -> BackendResult<EntityState> {
        let hub_state = self
            .client
            .get_state(&self.entity_id)
            .await
            .map_err(Self::map_err)?;

        tracing::debug!(entity_id = %self.entity_id, state = %hub_state.state, "Read hub state");

        Ok(EntityState::new(
            self.entity_id.clone(),
            hub_state.attributes.friendly_name,
            hub_state.state,
        ))
    }

    async fn toggle(&self) -> BackendResult<()> {
        self.client
            .toggle_switch(&self.entity_id)
            .await
            .map_err(Self::map_err)?;

        tracing::info!(entity_id = %self.entity_id, "Toggled switch");
        Ok(())
    }
}
