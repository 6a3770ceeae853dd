//! End-to-end tests for the hadash gateway
//!
//! These tests exercise the full stack over real sockets:
//! - HTTP API layer (`hadash-api`)
//! - Proxy backend (`hadash-proxy`)
//! - Home Assistant client (`hadash-client`)
//! - A scripted fake Home Assistant served by axum
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hadash-tests
//! ```
//!
//! # Test Structure
//!
//! - `gateway_e2e_test.rs` - dashboard endpoints against a fake hub

// This crate only contains tests, no library code
