//! # live-board
//!
//! Leptos + WASM presence layer for a shared drawing surface: remote cursors
//! with chat bubbles, flying emoji reactions, a cursor chat box, and a
//! context menu, all composed over a host `<canvas>`.
//!
//! Interaction rules live in the browser-independent `live` crate. This crate
//! owns the DOM: components, signal-backed state, timers, key listeners, and
//! the websocket room client. Everything that touches the browser is gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
