//! `setTimeout`-backed `Scheduler`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::controller::{GalleryEvent, Scheduler, TimerToken};

use super::EventSink;

pub struct WebScheduler {
    window: Window,
    sink: EventSink,
}

impl WebScheduler {
    pub fn new(window: Window, sink: EventSink) -> Self {
        Self { window, sink }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&mut self, delay_ms: u32, token: TimerToken) {
        set_timeout(&self.window, delay_ms, self.sink.clone(), GalleryEvent::Timer(token));
    }
}

/// Deliver `event` on a later turn of the event loop
///
/// Used where reporting synchronously would re-enter the controller.
pub fn defer(window: &Window, sink: EventSink, event: GalleryEvent) {
    set_timeout(window, 0, sink, event);
}

fn set_timeout(window: &Window, delay_ms: u32, sink: EventSink, event: GalleryEvent) {
    call_later(window, delay_ms, move || sink(event));
}

/// Run `f` once after `delay_ms`
pub fn call_later(window: &Window, delay_ms: u32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay) {
        log::warn!("setTimeout failed: {:?}", e);
    }
}
