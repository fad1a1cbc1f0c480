//! Built-in tween engine
//!
//! A small, deterministic implementation of the animation primitive. Time
//! only moves when [`TweenEngine::advance`] is called, which makes it usable
//! both from a `requestAnimationFrame` loop and from tests.
//!
//! Starting a tween on a property replaces any tween already running on that
//! same target and property, so two timelines never write one property at
//! once. `kill_tweens_of` cancels everything on a target and leaves its
//! values where they are.

use std::collections::HashMap;
use std::hash::Hash;

use super::animator::Animator;
use super::easing::Ease;
use super::vars::{Motion, Property, TweenVars};

#[derive(Clone, Debug)]
struct Tween<T> {
    target: T,
    property: Property,
    /// Captured when the tween first renders, unless given explicitly
    from: Option<f64>,
    to: f64,
    /// Engine time at which the delay runs out
    start: f64,
    duration: f64,
    ease: Ease,
}

/// Absorbs float drift in accumulated frame times
const PROGRESS_EPSILON: f64 = 1e-9;

impl<T> Tween<T> {
    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let progress = (now - self.start) / self.duration;
        if progress >= 1.0 - PROGRESS_EPSILON {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}

/// Tick-driven tween engine keyed by target handle
#[derive(Clone, Debug)]
pub struct TweenEngine<T> {
    now: f64,
    tweens: Vec<Tween<T>>,
    values: HashMap<T, TweenVars>,
    dirty: Vec<T>,
}

impl<T: Clone + Eq + Hash> Default for TweenEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> TweenEngine<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            tweens: Vec::new(),
            values: HashMap::new(),
            dirty: Vec::new(),
        }
    }

    /// Engine clock in seconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Current value of a property, if it was ever written
    pub fn value(&self, target: &T, property: Property) -> Option<f64> {
        self.values.get(target).and_then(|vars| vars.get(property))
    }

    pub fn values_of(&self, target: &T) -> Option<&TweenVars> {
        self.values.get(target)
    }

    /// Number of pending or running tweens on a target
    pub fn tween_count(&self, target: &T) -> usize {
        self.tweens.iter().filter(|t| &t.target == target).count()
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Targets whose values changed since the last call
    pub fn take_dirty(&mut self) -> Vec<T> {
        std::mem::take(&mut self.dirty)
    }

    /// Forget everything about a target (its node went away)
    pub fn forget(&mut self, target: &T) {
        self.tweens.retain(|t| &t.target != target);
        self.values.remove(target);
        self.dirty.retain(|t| t != target);
    }

    /// Move the clock forward and render every started tween
    pub fn advance(&mut self, elapsed_secs: f64) {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.now += elapsed_secs;
        }
        self.render();
    }

    fn render(&mut self) {
        let now = self.now;
        let mut finished = Vec::new();

        for (index, tween) in self.tweens.iter_mut().enumerate() {
            if now < tween.start {
                continue;
            }

            let current = self
                .values
                .get(&tween.target)
                .and_then(|vars| vars.get(tween.property))
                .unwrap_or_else(|| tween.property.initial_value());
            let from = *tween.from.get_or_insert(current);

            let progress = tween.progress(now);
            let value = if progress >= 1.0 {
                tween.to
            } else {
                from + (tween.to - from) * tween.ease.evaluate(progress)
            };
            self.values
                .entry(tween.target.clone())
                .or_default()
                .set(tween.property, value);
            mark_dirty(&mut self.dirty, &tween.target);

            if progress >= 1.0 {
                finished.push(index);
            }
        }

        for index in finished.into_iter().rev() {
            self.tweens.remove(index);
        }
    }

    fn write(&mut self, target: &T, vars: &TweenVars) {
        let entry = self.values.entry(target.clone()).or_default();
        for (property, value) in vars.entries() {
            entry.set(property, value);
        }
        mark_dirty(&mut self.dirty, target);
    }

    fn overwrite(&mut self, target: &T, vars: &TweenVars) {
        self.tweens
            .retain(|t| !(&t.target == target && vars.get(t.property).is_some()));
    }

    fn schedule(&mut self, target: &T, from: Option<&TweenVars>, to: &TweenVars, motion: &Motion) {
        self.overwrite(target, to);
        let start = self.now + motion.delay.max(0.0);
        for (property, value) in to.entries() {
            self.tweens.push(Tween {
                target: target.clone(),
                property,
                from: from.and_then(|f| f.get(property)),
                to: value,
                start,
                duration: motion.duration.max(0.0),
                ease: motion.ease,
            });
        }
        // Zero-length, undelayed tweens land immediately
        if motion.delay <= 0.0 {
            self.render();
        }
    }
}

fn mark_dirty<T: Clone + Eq>(dirty: &mut Vec<T>, target: &T) {
    if !dirty.contains(target) {
        dirty.push(target.clone());
    }
}

impl<T: Clone + Eq + Hash> Animator for TweenEngine<T> {
    type Target = T;

    fn set(&mut self, target: &T, vars: &TweenVars) {
        self.overwrite(target, vars);
        self.write(target, vars);
    }

    fn to(&mut self, target: &T, vars: &TweenVars, motion: &Motion) {
        self.schedule(target, None, vars, motion);
    }

    fn from_to(&mut self, target: &T, from: &TweenVars, to: &TweenVars, motion: &Motion) {
        self.overwrite(target, to);
        self.write(target, from);
        self.schedule(target, Some(from), to, motion);
    }

    fn kill_tweens_of(&mut self, target: &T) {
        self.tweens.retain(|t| &t.target != target);
    }

    fn release(&mut self, target: &T) {
        self.forget(target);
    }
}
