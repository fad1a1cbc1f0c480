//! Masonry Gallery WASM Module
//!
//! Client-side gallery engine for the Top Scene site. It computes a
//! column-balanced masonry layout from variable-height items and drives the
//! entrance, resize and hover animations of the rendered tiles.
//!
//! The engine itself (`layout`, `animation`, `controller`) is host-agnostic;
//! the `web` module plugs it into the browser through `web-sys` and GSAP.

pub mod error;
pub mod models;
pub mod layout;
pub mod animation;
pub mod controller;
pub mod api;
pub mod web;

// Re-export commonly used types
pub use error::GalleryError;
pub use models::*;
pub use layout::{compute_grid, columns_for_width, resolve_container_width};
pub use controller::{MasonryController, Surface, Scheduler, GalleryEvent};
pub use web::{init_gallery, MasonryGallery};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }

    log::info!("Masonry gallery WASM module initialized");
}
