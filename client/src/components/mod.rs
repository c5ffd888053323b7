//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the request form and list. They read shared state from
//! Leptos context and report user intent through `Callback` props or the
//! `GenerationController`.

pub mod chipset;
pub mod generation_request;
pub mod generation_request_form;
pub mod generation_requests;
pub mod request_details;
pub mod request_step;
pub mod request_summary;
