//! # landing
//!
//! Leptos + WASM interaction layer for the IntelliSoft landing page.
//!
//! The page markup is served as static HTML; this crate attaches behavior
//! to it: theme switching, the mobile menu, smooth anchor scrolling, the
//! simulated contact form, scroll reveal, the hero intro, toast
//! notifications, and console analytics. Browser glue is compiled under the
//! `csr` feature; everything else builds and tests on the host.

pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::run_when_ready();
}
