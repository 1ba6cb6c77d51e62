//! JIRA Bot landing site
//!
//! Single-page marketing site for an AI-powered JIRA workflow bot aimed at
//! child welfare agencies, server-rendered with Leptos and hydrated in the
//! browser. Content lives in `core::data`; the scroll-reveal, scroll-spy and
//! carousel state machines in `core` are driven by the hooks in `ui::hooks`.

#![recursion_limit = "4096"]

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
