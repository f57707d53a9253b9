//! Activity Board - Leptos frontend
//!
//! Client-side rendered page listing activities as cards, with a shared email
//! field for signing up.

pub mod app;
pub mod components;
pub mod page;
pub mod surface;

pub use app::App;

/// WASM entry point: console logging, panic hook, then mount
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(App);
}
