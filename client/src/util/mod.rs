//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and environment concerns from component
//! logic so the formatting rules can be tested natively.

pub mod auth;
pub mod details;
pub mod env;
pub mod status;
