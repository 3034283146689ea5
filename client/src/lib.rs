//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the static case-study content, the modal state,
//! components and pages. The `ssr` feature builds it for server rendering;
//! the `hydrate` feature builds the browser bundle and enables the web-sys
//! glue in `util`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portfolio client hydrating");
    leptos::mount::hydrate_body(app::App);
}
