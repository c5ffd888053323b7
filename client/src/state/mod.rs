//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `form`, `refresh`, `requests`) so
//! components depend on small focused models. Transitions are plain methods
//! on these structs and are tested without a browser.

pub mod auth;
pub mod form;
pub mod refresh;
pub mod requests;
