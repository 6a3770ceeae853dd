//! Home Assistant HTTP client implementation

use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{HubClientError, Result};
use crate::types::{HubState, ServiceCall};

/// Home Assistant REST API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: Client,
    base_url: Url,
}

impl HubClient {
    /// Create a new hub client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the hub (e.g., "http://localhost:8123")
    /// * `token` - Long-lived access token. `None` or a blank string sends
    ///   no `Authorization` header.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        Self::with_config(base_url, token, None)
    }

    /// Create a new hub client with an optional request timeout.
    ///
    /// Without a timeout, requests wait as long as the hub takes.
    pub fn with_config(
        base_url: &str,
        token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| HubClientError::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // States
    // =========================================================================

    /// Read the current state object of an entity
    #[instrument(skip(self))]
    pub async fn get_state(&self, entity_id: &str) -> Result<HubState> {
        let url = self.base_url.join(&format!("/api/states/{}", entity_id))?;
        debug!("Reading state from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HubClientError::from_transport)?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Call `<domain>.<service>` for a single entity.
    ///
    /// The hub answers with the list of states that changed; it is discarded.
    #[instrument(skip(self))]
    pub async fn call_service(
        &self,
        domain: &str,
        service: &str,
        entity_id: &str,
    ) -> Result<()> {
        let url = self
            .base_url
            .join(&format!("/api/services/{}/{}", domain, service))?;
        debug!("Calling service {}", url);

        let response = self
            .client
            .post(url)
            .json(&ServiceCall::new(entity_id))
            .send()
            .await
            .map_err(HubClientError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(&response))
        }
    }

    /// Toggle a switch entity via `switch.toggle`
    pub async fn toggle_switch(&self, entity_id: &str) -> Result<()> {
        self.call_service("switch", "toggle", entity_id).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::status_error(&response));
        }

        let body = response
            .bytes()
            .await
            .map_err(HubClientError::from_transport)?;
        serde_json::from_slice(&body).map_err(|e| HubClientError::ParseError(e.to_string()))
    }

    fn status_error(response: &reqwest::Response) -> HubClientError {
        Self::describe_status(response.status(), response.extensions().get::<ReasonPhrase>())
    }

    /// hyper only records the phrase when it differs from the canonical one
    fn describe_status(status: StatusCode, sent: Option<&ReasonPhrase>) -> HubClientError {
        let reason = sent
            .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
            .or_else(|| status.canonical_reason())
            .unwrap_or_default();
        HubClientError::status_error(status.as_u16(), reason)
    }
}
