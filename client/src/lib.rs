//! # client
//!
//! Leptos + WASM frontend for the login demo.
//!
//! Pages and components live here; the session model (identity lookup,
//! persistence, observable current user) lives in the `session` crate. This
//! crate supplies the browser halves of that model: a `localStorage`-backed
//! key-value store and a location-based navigator.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
