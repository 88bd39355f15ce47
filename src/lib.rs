//! # renta-dashboard
//!
//! Leptos + WASM views for a property-management dashboard: a maintenance
//! request ticketing page and a unit/room inventory browser, both backed by
//! a remote REST API.
//!
//! This crate contains pages, components, application state, network types,
//! and the pure room/filter derivation logic. The `ssr` feature adds the Axum
//! host binary in `main.rs`; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
