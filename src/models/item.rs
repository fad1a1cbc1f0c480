//! Gallery items as declared by the page, and their computed placements

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_string_or_number;
use crate::error::GalleryError;

/// One tile of the gallery (input, immutable after construction)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryItem {
    /// Unique key, also written to the wrapper's `data-key`
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,

    /// Image source reference
    pub img: String,

    /// Link target opened on click
    #[serde(default)]
    pub url: String,

    /// Target display height in pixels
    pub height: f64,

    /// Caption revealed on hover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GalleryItem {
    pub fn new(id: impl Into<String>, img: impl Into<String>, url: impl Into<String>, height: f64) -> Self {
        Self {
            id: id.into(),
            img: img.into(),
            url: url.into(),
            height,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the item on its own (height must be a positive finite number)
    pub fn validate(&self) -> Result<(), GalleryError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(GalleryError::InvalidItem {
                id: self.id.clone(),
                reason: format!("height must be positive, got {}", self.height),
            });
        }
        Ok(())
    }
}

/// Validate a whole item list: every item valid, ids unique
pub fn validate_items(items: &[GalleryItem]) -> Result<(), GalleryError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(GalleryError::InvalidItem {
                id: item.id.clone(),
                reason: "duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

/// A gallery item with its computed position (rebuilt on every layout pass)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlacedItem {
    #[serde(flatten)]
    pub item: GalleryItem,

    /// Column the item was packed into
    pub column: usize,

    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PlacedItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Bottom edge of the tile
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}
