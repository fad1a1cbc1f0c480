//! Viewport breakpoints for the column count

/// `(minimum viewport width, columns)`, checked top to bottom
///
/// Deliberately coarse: the 1000 and 600 steps both give two columns.
pub const COLUMN_BREAKPOINTS: [(f64, usize); 4] = [
    (1500.0, 3),
    (1000.0, 2),
    (600.0, 2),
    (400.0, 1),
];

/// Columns used below the smallest breakpoint
pub const MIN_COLUMNS: usize = 1;

/// Column count for a viewport width
pub fn columns_for_width(viewport_width: f64) -> usize {
    COLUMN_BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, columns)| *columns)
        .unwrap_or(MIN_COLUMNS)
}
