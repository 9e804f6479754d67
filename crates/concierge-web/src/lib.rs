//! OceanView Web Frontend
//!
//! Leptos-based WASM frontend: five static pages, the room catalog, and the
//! floating booking-assistant widget.

mod api;
mod app;
mod chat;
mod components;
mod layout;
mod pages;
mod widget;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
