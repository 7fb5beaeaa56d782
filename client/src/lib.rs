//! # jobboard-client
//!
//! Leptos + WASM frontend for the job board.
//!
//! This crate contains pages, components, shared UI state (auth, theme,
//! sidebar), and the job-type label helpers. The `hydrate` feature builds the
//! browser bundle; the `ssr` feature is used by the server crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::debug!("hydrating jobboard client");
    leptos::mount::hydrate_body(app::App);
}
