//! # client
//!
//! Leptos + WASM frontend for the FurGlo practice dashboard.
//!
//! This crate contains the route table, per-page state slices and their
//! fixtures, shared presentation components, the layout shell, and one page
//! component per business area. All data lives in memory; nothing is fetched
//! or persisted.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
