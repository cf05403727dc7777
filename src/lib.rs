//! # account-client
//!
//! Leptos + WASM frontend for the account service: login, registration,
//! and profile pages over the service's REST endpoints.
//!
//! Form state, validation rules, session storage, and HTTP outcome mapping
//! live in plain modules free of browser types so they run on the host in
//! tests; browser integration (`gloo-net`, localStorage, timers) is gated
//! behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;

/// WASM entry point: attach the client to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
