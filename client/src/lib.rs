//! # folio-client
//!
//! Leptos + WASM front end for a single-page personal portfolio.
//!
//! Page features (theme, scroll tracking, reveal and counter animations,
//! typing headline, project filter, contact form) keep their state in the
//! pure machines under `state`; `components` render that state and, in the
//! browser, wire it to DOM events through `util`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
