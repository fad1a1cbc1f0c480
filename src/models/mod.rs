//! Models module for the masonry gallery
//!
//! This module contains the data structures shared by the layout engine,
//! the animation controller and the JS-facing API.

pub mod item;
pub mod grid;
pub mod lifecycle;
pub mod config;
pub mod geometry;
pub mod serde_helpers;

// Re-export commonly used types
pub use item::*;
pub use grid::GridState;
pub use lifecycle::{AnimationLifecycleFlags, GalleryPhase};
pub use config::*;
pub use geometry::{Point, Size};
