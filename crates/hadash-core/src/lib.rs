//! hadash-core - Core traits and types for the dashboard gateway
//!
//! This crate provides the abstractions shared by the HTTP API layer and the
//! backends that talk to the smart-home hub. The API only ever sees a
//! [`SwitchBackend`]; how the backend reaches the hub is its own business.

pub mod backend;
pub mod error;
pub mod models;

pub use backend::SwitchBackend;
pub use error::{BackendError, BackendResult};
pub use models::EntityState;
