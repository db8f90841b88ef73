//! # krishi-client
//!
//! Leptos + WASM frontend for the Krishibharat farmer dashboard.
//!
//! This crate contains the dashboard page, its components, crop and profile
//! state, and the REST client for the crop service. The host binary renders
//! it on the server; the `hydrate` entry point takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
