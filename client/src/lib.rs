//! # tamweel-client
//!
//! Leptos + WASM frontend for the Tamweel crowdfunding platform, which matches
//! startup owners with sponsors.
//!
//! This crate contains the route table and its role-based access rules, the
//! mock auth session, the in-memory project catalogue, pages and components.
//! The `ssr` feature is consumed by the server binary; `hydrate` builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod nav;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating tamweel client");
    leptos::mount::hydrate_body(app::App);
}
