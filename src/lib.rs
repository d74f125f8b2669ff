//! Omnistudy - sign-in pages for the study tracker
//!
//! Login, registration and dashboard pages built with Leptos. Authentication
//! itself is delegated to a hosted auth provider; this crate wires forms,
//! session checks and navigation to it.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
