//! Error types for the gallery engine
//!
//! None of these ever reach the visitor. Each variant maps to a degradation
//! policy applied by the controller: skip the item, treat the image as
//! loaded, poll again, or retry the layout later.

use thiserror::Error;

/// Top-level gallery error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    /// A DOM target expected to exist is absent
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// An image failed to load (still counts as ready)
    #[error("Image failed to load: {0}")]
    ResourceLoadFailure(String),

    /// The animation primitive is not available yet
    #[error("Animation primitive `{0}` is not available")]
    DependencyNotReady(String),

    /// No usable container width from any fallback source
    #[error("Container width unavailable (container, parent and viewport all degenerate)")]
    DegenerateLayoutInput,

    /// A gallery item failed validation
    #[error("Invalid gallery item `{id}`: {reason}")]
    InvalidItem { id: String, reason: String },

    /// Options could not be parsed
    #[error("Invalid gallery options: {0}")]
    InvalidOptions(String),
}

impl From<GalleryError> for wasm_bindgen::JsValue {
    fn from(err: GalleryError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
