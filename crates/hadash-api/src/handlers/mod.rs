//! HTTP request handlers for the dashboard API
//!
//! These handlers only see the `SwitchBackend` trait and the read-only
//! dashboard config held in `AppState`.

pub mod config;
pub mod entity;
pub mod health;
