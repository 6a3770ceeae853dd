//! hadash-proxy - Home Assistant proxy backend
//!
//! Implements `SwitchBackend` by forwarding each call over HTTP to a Home
//! Assistant hub via `HubClient`, and reshaping the hub's state object into
//! the dashboard's `EntityState`.

mod proxy;

pub use proxy::HubProxyBackend;
