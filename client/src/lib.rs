//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio site and its admin back-office.
//!
//! The load-bearing piece is `theme`: light/dark preference resolution with
//! system/user provenance, persistence, and cross-tab reconciliation. `util`
//! holds the smaller UI mechanisms (sidebar memory, typewriter, visibility,
//! device heuristic) and `net` the content REST hooks.

pub mod app;
pub mod net;
pub mod pages;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
