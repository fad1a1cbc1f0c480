//! Animation building blocks
//!
//! - `easing`: GSAP-named easing curves
//! - `vars`: property bags and tween timing
//! - `animator`: the tweening primitive seam
//! - `tween`: built-in deterministic implementation of that seam
//! - `poses`: hidden / resting / off-canvas starting poses
//! - `readiness`: bounded polling for a late-loading primitive

pub mod easing;
pub mod vars;
pub mod animator;
pub mod tween;
pub mod poses;
pub mod readiness;

pub use animator::Animator;
pub use easing::{Ease, EaseDirection};
pub use tween::TweenEngine;
pub use vars::{Motion, Property, TweenVars};
