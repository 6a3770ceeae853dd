//! Home Assistant client library
//!
//! Provides a typed HTTP client for the subset of the Home Assistant REST API
//! the dashboard gateway needs: reading an entity's state and calling a
//! service on it.
//!
//! # Example
//!
//! ```rust,no_run
//! use hadash_client::HubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hadash_client::HubClientError> {
//!     let client = HubClient::new("http://localhost:8123", Some("long-lived-token"))?;
//!
//!     let state = client.get_state("switch.pump_plug").await?;
//!     println!("{} is {}", state.friendly_name().unwrap_or("pump"), state.state);
//!
//!     client.toggle_switch("switch.pump_plug").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module serves an axum router on an ephemeral port, which is
//! how the integration tests stand up a fake hub:
//!
//! ```rust,ignore
//! use hadash_client::testing::TestServer;
//!
//! let hub = TestServer::start(mock_hub_router()).await?;
//! let state = hub.client.get_state("switch.pump_plug").await?;
//! ```

mod client;
mod error;
pub mod testing;
mod types;

pub use client::HubClient;
pub use error::{HubClientError, Result};
pub use types::*;
