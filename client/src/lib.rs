//! # client
//!
//! Leptos + WASM frontend for the LithoSurfer sample browser.
//!
//! This crate contains pages, components, reactive stores and the REST client
//! for the LithoDat API. The map view mounts the `map` crate's engine through
//! the `SamplesMap` bridge component; everything else is plain Leptos.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
