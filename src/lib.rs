//! # signin-client
//!
//! Leptos + WASM login client: email/password form validation, the submit
//! lifecycle, session-aware redirects, and expired-session messaging.
//!
//! The form logic (`state::login`, `util::validate`, `pages::login_flow`) is
//! plain Rust and runs without a browser; pages and components bind it to
//! the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating signin client");
    leptos::mount::hydrate_body(app::App);
}
