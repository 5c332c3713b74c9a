#![recursion_limit = "256"]
pub mod app;
pub mod constants;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod assets;
#[cfg(feature = "ssr")]
pub mod config;

pub use app::*;

#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub site_root: String,
    pub cache_max_age: u64,
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
