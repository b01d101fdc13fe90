//! # console
//!
//! Leptos + WASM admin console for the meeting platform backend.
//!
//! This crate contains the routed pages, shared components, reactive state,
//! resource descriptors, and the HTTP helpers that talk to the backend
//! through the host server's `/api` forwarder.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resources;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
