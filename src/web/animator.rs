//! Runtime choice between the GSAP and built-in animators

use crate::animation::{Animator, Motion, TweenVars};

use super::builtin::StyleAnimator;
use super::dom::DomNode;
use super::gsap::GsapAnimator;

pub enum WebAnimator {
    Gsap(GsapAnimator),
    Builtin(StyleAnimator),
}

impl WebAnimator {
    /// Forward an animation frame to the built-in engine
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if let WebAnimator::Builtin(animator) = self {
            animator.on_frame(timestamp_ms);
        }
    }
}

impl Animator for WebAnimator {
    type Target = DomNode;

    fn set(&mut self, target: &DomNode, vars: &TweenVars) {
        match self {
            WebAnimator::Gsap(animator) => animator.set(target, vars),
            WebAnimator::Builtin(animator) => animator.set(target, vars),
        }
    }

    fn to(&mut self, target: &DomNode, vars: &TweenVars, motion: &Motion) {
        match self {
            WebAnimator::Gsap(animator) => animator.to(target, vars, motion),
            WebAnimator::Builtin(animator) => animator.to(target, vars, motion),
        }
    }

    fn from_to(&mut self, target: &DomNode, from: &TweenVars, to: &TweenVars, motion: &Motion) {
        match self {
            WebAnimator::Gsap(animator) => animator.from_to(target, from, to, motion),
            WebAnimator::Builtin(animator) => animator.from_to(target, from, to, motion),
        }
    }

    fn kill_tweens_of(&mut self, target: &DomNode) {
        match self {
            WebAnimator::Gsap(animator) => animator.kill_tweens_of(target),
            WebAnimator::Builtin(animator) => animator.kill_tweens_of(target),
        }
    }

    fn release(&mut self, target: &DomNode) {
        match self {
            WebAnimator::Gsap(animator) => animator.release(target),
            WebAnimator::Builtin(animator) => animator.release(target),
        }
    }
}
