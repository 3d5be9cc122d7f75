//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request construction, credentials, and the session-expiry rule,
//! `api` maps endpoints onto typed calls, and `types` defines the wire schema.

pub mod api;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
