//! # vc-client
//!
//! Leptos + WASM frontend for submitting and monitoring image and video
//! generation requests.
//!
//! The crate holds the request controller, the components that render the
//! request form and list, view-model state, and the REST client for the
//! generation service. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature lets the server render the same `App`.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the server-rendered page to the reactive tree.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
