//! # sendy-review
//!
//! Leptos + WASM review dashboard for Get Sendy content packs.
//!
//! The crate is presentation glue over an external Content Pack Service:
//! pages fetch JSON, render it, and post reviewer actions (save notes,
//! approve, reject, export a handoff file). All payloads decode into typed
//! records at the service boundary; the service stays the source of truth
//! and every mutation is followed by a re-fetch.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging hooks and hydrate the
/// server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
