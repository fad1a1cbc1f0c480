//! Hover micro-interactions
//!
//! These only touch the hovered item's own nodes, so they never block or
//! get blocked by timelines of other items.

use crate::animation::{Animator, Ease, EaseDirection, Motion, TweenVars};
use crate::models::MasonryConfig;

use super::host::ItemNodes;

pub const HOVER_DURATION: f64 = 0.3;
pub const DESCRIPTION_REVEAL_DURATION: f64 = 0.4;
pub const OVERLAY_HOVER_OPACITY: f64 = 0.3;
/// Descriptions slide up from this far below their resting spot
pub const DESCRIPTION_OFFSET: f64 = 20.0;

const EASE_OUT: Ease = Ease::Power(2, EaseDirection::Out);
const EASE_IN: Ease = Ease::Power(2, EaseDirection::In);
/// GSAP's default ease, used where the page never named one
const EASE_DEFAULT: Ease = Ease::Power(1, EaseDirection::Out);

pub fn hover_in<A: Animator>(animator: &mut A, nodes: &ItemNodes<A::Target>, config: &MasonryConfig) {
    if config.scale_on_hover {
        animator.to(
            &nodes.wrapper,
            &TweenVars::new().scale(config.hover_scale),
            &Motion::new(HOVER_DURATION, EASE_OUT),
        );
    }

    if config.color_shift_on_hover {
        if let Some(overlay) = &nodes.overlay {
            animator.to(
                overlay,
                &TweenVars::new().opacity(OVERLAY_HOVER_OPACITY),
                &Motion::new(HOVER_DURATION, EASE_DEFAULT),
            );
        }
    }

    if let Some(description) = &nodes.description {
        animator.from_to(
            description,
            &TweenVars::new().opacity(0.0).y(DESCRIPTION_OFFSET),
            &TweenVars::new().opacity(1.0).y(0.0),
            &Motion::new(DESCRIPTION_REVEAL_DURATION, EASE_OUT),
        );
    }
}

pub fn hover_out<A: Animator>(animator: &mut A, nodes: &ItemNodes<A::Target>, config: &MasonryConfig) {
    if config.scale_on_hover {
        animator.to(
            &nodes.wrapper,
            &TweenVars::new().scale(1.0),
            &Motion::new(HOVER_DURATION, EASE_OUT),
        );
    }

    if config.color_shift_on_hover {
        if let Some(overlay) = &nodes.overlay {
            animator.to(
                overlay,
                &TweenVars::new().opacity(0.0),
                &Motion::new(HOVER_DURATION, EASE_DEFAULT),
            );
        }
    }

    if let Some(description) = &nodes.description {
        animator.to(
            description,
            &TweenVars::new().opacity(0.0).y(DESCRIPTION_OFFSET),
            &Motion::new(HOVER_DURATION, EASE_IN),
        );
    }
}
