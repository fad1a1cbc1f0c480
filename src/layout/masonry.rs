//! Greedy shortest-column-first packing

use crate::models::{GalleryItem, GridState, PlacedItem};

/// Index of the shortest column
///
/// Ties go to the lowest index, which keeps the layout deterministic.
pub fn shortest_column(column_heights: &[f64]) -> usize {
    let mut index = 0;
    let mut best = column_heights.first().copied().unwrap_or(0.0);
    for (i, height) in column_heights.iter().enumerate().skip(1) {
        if *height < best {
            best = *height;
            index = i;
        }
    }
    index
}

/// Compute absolute placements for every item
///
/// Items are visited in order; each goes to the shortest column at
/// `x = column * (container_width / columns)` and `y` = that column's current
/// height. `max_height` is the tallest column afterwards (0 for no items).
///
/// A column count of zero is treated as one.
pub fn compute_grid(items: &[GalleryItem], columns: usize, container_width: f64) -> GridState {
    let columns = columns.max(1);
    let column_width = container_width / columns as f64;
    let mut column_heights = vec![0.0_f64; columns];

    let placed = items
        .iter()
        .map(|item| {
            let column = shortest_column(&column_heights);
            let y = column_heights[column];
            column_heights[column] += item.height;

            PlacedItem {
                item: item.clone(),
                column,
                x: column_width * column as f64,
                y,
                w: column_width,
                h: item.height,
            }
        })
        .collect::<Vec<_>>();

    let max_height = column_heights.iter().copied().fold(0.0_f64, f64::max);

    GridState {
        items: placed,
        max_height,
        columns,
        column_heights,
        container_width,
    }
}
