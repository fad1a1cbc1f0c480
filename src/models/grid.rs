//! Grid state produced by a layout pass

use serde::Serialize;

use super::item::PlacedItem;

/// Ordered placements plus the resulting container height
///
/// Rebuilt wholesale on every layout pass, never patched.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridState {
    pub items: Vec<PlacedItem>,

    /// Tallest column; becomes the container height
    pub max_height: f64,

    /// Number of columns the items were packed into
    pub columns: usize,

    /// Final accumulated height per column
    pub column_heights: Vec<f64>,

    /// Width the columns were derived from
    pub container_width: f64,
}

impl GridState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn column_width(&self) -> f64 {
        if self.columns == 0 {
            0.0
        } else {
            self.container_width / self.columns as f64
        }
    }

    pub fn find(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|placed| placed.id() == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|placed| placed.id() == id)
    }
}
