//! Built-in animator for pages without GSAP
//!
//! Wraps [`TweenEngine`] and steps it from `requestAnimationFrame`, writing
//! the interpolated values back as inline styles.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::animation::{Animator, Motion, TweenEngine, TweenVars};

use super::dom::DomNode;

/// Receives animation-frame timestamps (milliseconds)
pub type FrameSink = std::rc::Rc<dyn Fn(f64)>;

pub struct StyleAnimator {
    window: Window,
    engine: TweenEngine<DomNode>,
    frames: FrameSink,
    frame_pending: bool,
    last_frame_ms: Option<f64>,
}

impl StyleAnimator {
    pub fn new(window: Window, frames: FrameSink) -> Self {
        Self {
            window,
            engine: TweenEngine::new(),
            frames,
            frame_pending: false,
            last_frame_ms: None,
        }
    }

    /// Step the engine to `timestamp_ms` and paint
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.frame_pending = false;
        let elapsed_ms = match self.last_frame_ms {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);
        self.engine.advance(elapsed_ms / 1000.0);
        self.flush();

        if self.engine.is_animating() {
            self.request_frame();
        } else {
            self.last_frame_ms = None;
        }
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        if self.last_frame_ms.is_none() {
            // Start the clock now rather than at the first frame
            self.last_frame_ms = self.window.performance().map(|p| p.now());
        }
        let frames = self.frames.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| frames(timestamp));
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(_) => self.frame_pending = true,
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    /// Write every changed node's values to its inline style
    fn flush(&mut self) {
        for node in self.engine.take_dirty() {
            if let Some(vars) = self.engine.values_of(&node) {
                paint(&node, vars);
            }
        }
    }

    fn after_change(&mut self) {
        self.flush();
        if self.engine.is_animating() {
            self.request_frame();
        }
    }
}

fn paint(node: &DomNode, vars: &TweenVars) {
    let style = node.element().style();
    let mut writes: Vec<(&str, String)> = Vec::with_capacity(5);

    if vars.x.is_some() || vars.y.is_some() || vars.scale.is_some() {
        writes.push((
            "transform",
            format!(
                "translate({}px, {}px) scale({})",
                vars.x.unwrap_or(0.0),
                vars.y.unwrap_or(0.0),
                vars.scale.unwrap_or(1.0)
            ),
        ));
    }
    if let Some(width) = vars.width {
        writes.push(("width", format!("{}px", width)));
    }
    if let Some(height) = vars.height {
        writes.push(("height", format!("{}px", height)));
    }
    if let Some(opacity) = vars.opacity {
        writes.push(("opacity", opacity.to_string()));
    }
    if let Some(blur) = vars.blur {
        writes.push(("filter", format!("blur({}px)", blur)));
    }

    for (property, value) in writes {
        if let Err(e) = style.set_property(property, &value) {
            log::debug!("Could not set {}: {:?}", property, e);
        }
    }
}

impl Animator for StyleAnimator {
    type Target = DomNode;

    fn set(&mut self, target: &DomNode, vars: &TweenVars) {
        self.engine.set(target, vars);
        self.after_change();
    }

    fn to(&mut self, target: &DomNode, vars: &TweenVars, motion: &Motion) {
        self.engine.to(target, vars, motion);
        self.after_change();
    }

    fn from_to(&mut self, target: &DomNode, from: &TweenVars, to: &TweenVars, motion: &Motion) {
        self.engine.from_to(target, from, to, motion);
        self.after_change();
    }

    fn kill_tweens_of(&mut self, target: &DomNode) {
        self.engine.kill_tweens_of(target);
    }

    fn release(&mut self, target: &DomNode) {
        self.engine.forget(target);
    }
}
