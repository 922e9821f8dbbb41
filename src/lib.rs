//! # promptroom
//!
//! Leptos + WASM chat client for AI conversation rooms. A user signs in
//! with an email, picks or creates a room, and exchanges prompts with an
//! asynchronous AI responder.
//!
//! The interesting part is the client-side synchronization engine in
//! `state`: prompts are applied optimistically with a temporary id,
//! reconciled against the server record once the create call resolves, and
//! AI responses — which arrive with no push channel — are picked up by
//! caller-owned refresh polling that merges safely with any in-flight
//! send.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
