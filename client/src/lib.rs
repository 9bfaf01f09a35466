//! # client
//!
//! Leptos + WASM front end for the whiteboard. Renders the tool bar and hosts
//! the `canvas` crate's imperative engine via the `CanvasHost` bridge
//! component.
//!
//! Browser-only code is gated behind the `csr` feature so the state and
//! helper modules stay testable natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
