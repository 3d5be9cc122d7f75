//! # weather-client
//!
//! Leptos + WASM frontend for the weather dashboard. Signed-in users search
//! a city for current conditions and forecasts and keep a short history of
//! saved lookups.
//!
//! This crate contains pages, components, application state, the
//! authenticated REST client, and the browser utilities behind them: the
//! token store, the route guard, and theme persistence.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
