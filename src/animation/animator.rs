//! The tweening primitive the controller drives

use super::vars::{Motion, TweenVars};

/// Interpolates numeric style properties of rendered nodes over time
///
/// Tweens run asynchronously with respect to the caller and are not
/// cancel-safe on their own: callers must `kill_tweens_of` a target before
/// starting a competing timeline on it.
pub trait Animator {
    /// Handle of an animated node
    type Target;

    /// Apply values immediately, without a transition
    fn set(&mut self, target: &Self::Target, vars: &TweenVars);

    /// Tween from the current values to `vars`
    fn to(&mut self, target: &Self::Target, vars: &TweenVars, motion: &Motion);

    /// Apply `from` immediately, then tween to `to`
    fn from_to(&mut self, target: &Self::Target, from: &TweenVars, to: &TweenVars, motion: &Motion);

    /// Cancel every pending or running tween on `target`
    fn kill_tweens_of(&mut self, target: &Self::Target);

    /// `target` was removed from the page; drop anything held for it
    fn release(&mut self, target: &Self::Target) {
        self.kill_tweens_of(target);
    }
}
