//! Web UI for activity-board
//!
//! A Yew front end for the extracurricular activity signup page. Mounts into
//! `#app` when the page shell provides it, otherwise into `<body>`.

mod app;
mod client;
mod components;
pub mod document;
pub mod storage;

use wasm_bindgen::prelude::*;

pub use client::GlooApi;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match root {
        Some(root) => yew::Renderer::<app::App>::with_root(root).render(),
        None => yew::Renderer::<app::App>::new().render(),
    };
}
