//! Masonry Layout Engine
//!
//! Pure functions that turn an item list, a column count and a container
//! width into absolute placements. No DOM access happens here; the
//! controller feeds in measurements taken by the host.

pub mod columns;
pub mod masonry;
pub mod width;

pub use columns::columns_for_width;
pub use masonry::{compute_grid, shortest_column};
pub use width::{checked_width, resolve_container_width, ResolvedWidth, WidthSource};
