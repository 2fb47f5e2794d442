pub mod app;
pub mod components;
pub mod files;
pub mod storage;

/// Client-side rendering entry point
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
