/// Tab Orbit - browser extension for exploring open tabs
/// Built with Rust + WASM + Yew

pub mod category;
pub mod controller;
pub mod domain;
pub mod operations;
pub mod session;
pub mod store;
pub mod tab_data;
pub mod view;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core domain functions for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::extract_domain(url)
}

#[wasm_bindgen]
pub fn categorize_url(url: &str) -> String {
    category::categorize(url).label().to_string()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
