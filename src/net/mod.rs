//! Networking modules for the auth HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `mock` stands in when no endpoint is configured,
//! and `types` defines the wire schema.

pub mod api;
pub mod mock;
pub mod types;
