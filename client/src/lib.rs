//! # portfolio-ui
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its components, UI state, static content,
//! and the browser-facing theme and scroll helpers. The `ssr` feature is used
//! by the server binary for rendering; the `hydrate` feature builds the WASM
//! bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
