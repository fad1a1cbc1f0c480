//! Stateless layout exports
//!
//! For pages that want the masonry placements but render (and animate)
//! the tiles themselves.

use wasm_bindgen::prelude::*;

use crate::layout::{checked_width, columns_for_width, compute_grid};
use crate::models::{validate_items, GalleryItem};

use super::helpers::{from_js, gallery_error, to_js};

/// Compute masonry placements for `items`
///
/// `columns` of 0 derives the count from the current `containerWidth`
/// using the standard breakpoints. A zero, negative or non-finite width
/// is rejected.
#[wasm_bindgen(js_name = computeGrid)]
pub fn compute_grid_js(items: JsValue, columns: usize, container_width: f64) -> Result<JsValue, JsValue> {
    let items: Vec<GalleryItem> = from_js(items, "items").map_err(gallery_error)?;
    validate_items(&items).map_err(gallery_error)?;
    let container_width = checked_width(container_width).map_err(gallery_error)?;

    let columns = if columns == 0 {
        columns_for_width(container_width)
    } else {
        columns
    };
    let grid = compute_grid(&items, columns, container_width);
    crate::wasm_log!(
        "computeGrid: {} item(s), {} column(s), height {}",
        grid.len(),
        grid.columns,
        grid.max_height
    );

    to_js(&grid)
}

/// Column count for a viewport width
#[wasm_bindgen(js_name = columnsForWidth)]
pub fn columns_for_viewport(viewport_width: f64) -> usize {
    columns_for_width(viewport_width)
}
