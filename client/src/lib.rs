//! # pinboard-client
//!
//! Leptos frontend for the Pinboard image-discovery app.
//!
//! This crate contains the view history navigator, the selection and UI
//! state it drives, the embedded catalog, and the pages and components that
//! render each screen. The `ssr` feature is enabled by the server binary; the
//! `hydrate` feature builds the WASM bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
