//! Code-Ride site runtime.
//!
//! Rust + WASM replacement for the site's page script: loads the shared
//! header/footer, highlights navigation, drives the side menu and the
//! rider/driver switch, and stubs the auth forms.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod events;
pub mod loader;
pub mod menu;
pub mod mode;
pub mod nav;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    initialize();
}

/// Set up the current page.
#[wasm_bindgen]
pub fn initialize() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    bootstrap::run_current();
}
