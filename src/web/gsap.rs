//! GSAP bindings
//!
//! The page loads GSAP as a global script; these externs call straight into
//! `gsap.set`, `gsap.to`, `gsap.fromTo` and `gsap.killTweensOf`. Every binding
//! is `catch`, so a missing or broken global surfaces as an `Err` instead of
//! trapping the module.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::animation::{Animator, Motion, TweenVars};

use super::dom::DomNode;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(target: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(target: &JsValue, from: &JsValue, to: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = killTweensOf)]
    fn gsap_kill_tweens_of(target: &JsValue) -> Result<JsValue, JsValue>;
}

/// Whether the `gsap` global is loaded
pub fn gsap_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("gsap"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Vars object in GSAP's shape
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GsapVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay: Option<f64>,
}

impl GsapVars {
    fn from_vars(vars: &TweenVars) -> Self {
        Self {
            opacity: vars.opacity,
            x: vars.x,
            y: vars.y,
            width: vars.width,
            height: vars.height,
            scale: vars.scale,
            filter: vars.blur.map(|radius| format!("blur({}px)", radius)),
            ..Self::default()
        }
    }

    fn with_motion(mut self, motion: &Motion) -> Self {
        self.duration = Some(motion.duration);
        self.ease = Some(motion.ease.to_string());
        if motion.delay > 0.0 {
            self.delay = Some(motion.delay);
        }
        self
    }

    fn to_js(&self) -> Option<JsValue> {
        match serde_wasm_bindgen::to_value(self) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Could not build GSAP vars: {}", e);
                None
            }
        }
    }
}

fn report(call: &str, result: Result<JsValue, JsValue>) {
    if let Err(e) = result {
        log::warn!("gsap.{} failed: {:?}", call, e);
    }
}

/// `Animator` backed by the page's GSAP instance
#[derive(Debug, Default)]
pub struct GsapAnimator;

impl GsapAnimator {
    pub fn new() -> Self {
        Self
    }
}

impl Animator for GsapAnimator {
    type Target = DomNode;

    fn set(&mut self, target: &DomNode, vars: &TweenVars) {
        if let Some(vars) = GsapVars::from_vars(vars).to_js() {
            report("set", gsap_set(target.element(), &vars));
        }
    }

    fn to(&mut self, target: &DomNode, vars: &TweenVars, motion: &Motion) {
        if let Some(vars) = GsapVars::from_vars(vars).with_motion(motion).to_js() {
            report("to", gsap_to(target.element(), &vars));
        }
    }

    fn from_to(&mut self, target: &DomNode, from: &TweenVars, to: &TweenVars, motion: &Motion) {
        let from = GsapVars::from_vars(from).to_js();
        let to = GsapVars::from_vars(to).with_motion(motion).to_js();
        if let (Some(from), Some(to)) = (from, to) {
            report("fromTo", gsap_from_to(target.element(), &from, &to));
        }
    }

    fn kill_tweens_of(&mut self, target: &DomNode) {
        report("killTweensOf", gsap_kill_tweens_of(target.element()));
    }
}
