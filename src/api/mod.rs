//! Masonry gallery WASM API
//!
//! - `helpers`: console logging macros and serde conversion helpers
//! - `layout`: stateless layout functions for callers that render themselves
//!
//! The stateful gallery class lives in [`crate::web`].

pub mod helpers;
pub mod layout;

pub use layout::{columns_for_viewport, compute_grid_js};
