//! SwitchBackend trait - the seam between the HTTP API and the hub

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::models::EntityState;

/// A backend bound to a single switch entity on the hub.
///
/// Implementations hold no per-request state; every call is independent and
/// may run concurrently with any other call.
#[async_trait]
pub trait SwitchBackend: Send + Sync {
    /// Read the entity's current state from the hub
    async fn read_state(&self) -> BackendResult<EntityState>;

    /// Flip the switch. No state is returned; callers re-read if they care.
    async fn toggle(&self) -> BackendResult<()>;
}
