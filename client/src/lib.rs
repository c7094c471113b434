//! # qbv-client
//!
//! Leptos + WASM frontend for the QBV onboarding flow: registration, data
//! approval review, and the brand-value dashboard.
//!
//! This crate contains pages, components, application state, the static
//! report catalog, and browser utilities. The `hydrate` feature builds the
//! WASM bundle; the `ssr` feature is consumed by the `qbv-server` host.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod report;
pub mod state;
pub mod util;

/// WASM entry point: wire logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating qbv client (base path: {:?})", config::base_path());
    leptos::mount::hydrate_body(app::App);
}
