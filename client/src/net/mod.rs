//! Networking modules for the generation service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema shared with
//! the service.

pub mod api;
pub mod types;
