//! # activity-panel
//!
//! Leptos + WASM client for the activities signup API. Lists activities with
//! their remaining capacity, registers an email for an activity, and shows
//! per-activity rosters with an unregister action.
//!
//! State transitions and response handling are plain Rust (`state`, `net`,
//! `controller`) and run natively; the `csr` feature adds the browser
//! transport, timers, and the mount entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;

/// Browser entry point: install panic/console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
