pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod leaflet;
pub mod map_controller;
pub mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
