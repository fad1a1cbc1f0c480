//! Scripted poses of a tile: hidden, resting, and where the entrance starts

use crate::models::{AnimateFrom, PlacedItem, Point, Size};

use super::vars::TweenVars;

/// How far outside the viewport off-canvas starts sit
pub const OFFSCREEN_MARGIN: f64 = 200.0;

/// Extra downward offset of the hidden pose
pub const HIDDEN_DROP: f64 = 100.0;

/// Blur radius of an unfocused tile when blur-to-focus is on
pub const FOCUS_BLUR_PX: f64 = 10.0;

/// Candidates for `AnimateFrom::Random`
pub const RANDOM_DIRECTIONS: [AnimateFrom; 4] = [
    AnimateFrom::Top,
    AnimateFrom::Bottom,
    AnimateFrom::Left,
    AnimateFrom::Right,
];

/// Replace `Random` with a concrete direction; `pick(n)` returns an index below `n`
pub fn resolve_direction(from: AnimateFrom, pick: &mut dyn FnMut(usize) -> usize) -> AnimateFrom {
    match from {
        AnimateFrom::Random => {
            let index = pick(RANDOM_DIRECTIONS.len()) % RANDOM_DIRECTIONS.len();
            RANDOM_DIRECTIONS[index]
        }
        other => other,
    }
}

/// Uniform index below `len` from the platform RNG (0 if it is unavailable)
pub fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf) as usize % len,
        Err(e) => {
            log::debug!("random direction unavailable ({}), using the first one", e);
            0
        }
    }
}

/// Off-canvas coordinate an entrance starts from
///
/// Without a measurable container the tile starts at its resting position.
pub fn start_position(placed: &PlacedItem, direction: AnimateFrom, container: Option<Size>, viewport: Size) -> Point {
    let container = match container {
        Some(size) => size,
        None => return Point::new(placed.x, placed.y),
    };

    match direction {
        AnimateFrom::Top => Point::new(placed.x, -OFFSCREEN_MARGIN),
        AnimateFrom::Bottom => Point::new(placed.x, viewport.height + OFFSCREEN_MARGIN),
        AnimateFrom::Left => Point::new(-OFFSCREEN_MARGIN, placed.y),
        AnimateFrom::Right => Point::new(viewport.width + OFFSCREEN_MARGIN, placed.y),
        AnimateFrom::Center => Point::new(
            container.width / 2.0 - placed.w / 2.0,
            container.height / 2.0 - placed.h / 2.0,
        ),
        AnimateFrom::Random | AnimateFrom::InPlace => Point::new(placed.x, placed.y + HIDDEN_DROP),
    }
}

/// Pre-entrance pose: transparent, dropped below `start`, optionally blurred
pub fn hidden_pose(placed: &PlacedItem, start: Point, blur_to_focus: bool) -> TweenVars {
    let vars = TweenVars::new()
        .opacity(0.0)
        .at(start.x, start.y + HIDDEN_DROP)
        .size(placed.w, placed.h);
    if blur_to_focus {
        vars.blur(FOCUS_BLUR_PX)
    } else {
        vars
    }
}

/// Where the entrance ends
pub fn resting_pose(placed: &PlacedItem, blur_to_focus: bool) -> TweenVars {
    let vars = TweenVars::new()
        .opacity(1.0)
        .at(placed.x, placed.y)
        .size(placed.w, placed.h);
    if blur_to_focus {
        vars.blur(0.0)
    } else {
        vars
    }
}

/// Position and size only, for resize transitions
pub fn layout_pose(placed: &PlacedItem) -> TweenVars {
    TweenVars::new().at(placed.x, placed.y).size(placed.w, placed.h)
}
