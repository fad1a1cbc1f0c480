//! The `MasonryGallery` class and the `initGallery` entry point
//!
//! The controller sits in an `Rc<RefCell<Option<..>>>`. Every DOM callback
//! holds only a `Weak` to it, so dropping the gallery releases the
//! controller even while images or timers are still pending. A callback
//! that fires while the controller is already borrowed is re-queued on
//! the next turn of the event loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::animation::readiness::{DependencyPoll, PollOutcome};
use crate::api::helpers::{from_js, gallery_error, to_js};
use crate::controller::{GalleryEvent, MasonryController};
use crate::error::GalleryError;
use crate::models::{AnimatorKind, GalleryItem, MasonryConfig, VisibilityOptions};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

use super::animator::WebAnimator;
use super::builtin::{FrameSink, StyleAnimator};
use super::dom::DomSurface;
use super::gsap::{gsap_available, GsapAnimator};
use super::scheduler::{call_later, WebScheduler};
use super::EventSink;

type WebController = MasonryController<DomSurface, WebAnimator, WebScheduler>;
type Slot = Rc<RefCell<Option<WebController>>>;
type WeakSlot = Weak<RefCell<Option<WebController>>>;

const GSAP: &str = "gsap";

thread_local! {
    /// Galleries started by `initGallery`; nothing on the JS side owns them
    static GALLERIES: RefCell<Vec<MasonryGallery>> = RefCell::new(Vec::new());
}

// ============================================================================
// Callback plumbing
// ============================================================================

fn event_sink(window: &Window, slot: &Slot) -> EventSink {
    let window = window.clone();
    let weak = Rc::downgrade(slot);
    Rc::new(move |event| dispatch(&window, &weak, event))
}

fn dispatch(window: &Window, weak: &WeakSlot, event: GalleryEvent) {
    let Some(slot) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        let (retry_window, retry_weak) = (window.clone(), weak.clone());
        call_later(window, 0, move || dispatch(&retry_window, &retry_weak, event));
        return;
    };
    if let Some(controller) = guard.as_mut() {
        controller.handle(event);
    }
}

fn frame_sink(window: &Window, slot: &Slot) -> FrameSink {
    let window = window.clone();
    let weak = Rc::downgrade(slot);
    Rc::new(move |timestamp| deliver_frame(&window, &weak, timestamp))
}

fn deliver_frame(window: &Window, weak: &WeakSlot, timestamp_ms: f64) {
    let Some(slot) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        let (retry_window, retry_weak) = (window.clone(), weak.clone());
        call_later(window, 0, move || deliver_frame(&retry_window, &retry_weak, timestamp_ms));
        return;
    };
    if let Some(controller) = guard.as_mut() {
        controller.animator_mut().on_frame(timestamp_ms);
    }
}

// ============================================================================
// Input parsing
// ============================================================================

fn parse_items(items: JsValue) -> Result<Vec<GalleryItem>, GalleryError> {
    from_js(items, "items")
}

fn parse_config(options: JsValue) -> Result<MasonryConfig, GalleryError> {
    if options.is_undefined() || options.is_null() {
        return Ok(MasonryConfig::default());
    }
    from_js(options, "options")
}

fn browser_window() -> Result<Window, GalleryError> {
    web_sys::window().ok_or_else(|| GalleryError::MissingElement("window".to_string()))
}

fn find_container(document: &Document, container_id: &str) -> Result<HtmlElement, GalleryError> {
    document
        .get_element_by_id(container_id)
        .ok_or_else(|| GalleryError::MissingElement(format!("#{}", container_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GalleryError::MissingElement(format!("#{} (not an HTML element)", container_id)))
}

// ============================================================================
// MasonryGallery
// ============================================================================

/// One masonry gallery bound to a container element
#[wasm_bindgen]
pub struct MasonryGallery {
    slot: Slot,
    window: Window,
    observer: Option<IntersectionObserver>,
    on_intersect: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl MasonryGallery {
    /// Render `items` into `#containerId`
    ///
    /// Throws if the container is missing, the input does not parse, or
    /// GSAP is selected but not loaded yet.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, items: JsValue, options: JsValue) -> Result<MasonryGallery, JsValue> {
        let items = parse_items(items).map_err(gallery_error)?;
        let config = parse_config(options).map_err(gallery_error)?;
        Self::create(container_id, items, config).map_err(gallery_error)
    }

    /// Force a layout pass now, bypassing the resize debounce
    pub fn relayout(&self) {
        self.with_controller(|controller| controller.update_layout());
    }

    /// Column count of the current layout (0 before the first pass)
    pub fn columns(&self) -> usize {
        self.read(|controller| controller.grid().columns).unwrap_or(0)
    }

    #[wasm_bindgen(js_name = gridHeight)]
    pub fn grid_height(&self) -> f64 {
        self.read(|controller| controller.grid().max_height).unwrap_or(0.0)
    }

    /// `"loading"`, `"readyHidden"`, `"entering"` or `"settled"`; null once destroyed
    pub fn phase(&self) -> Result<JsValue, JsValue> {
        match self.read(|controller| controller.phase()) {
            Some(phase) => to_js(&phase),
            None => Ok(JsValue::NULL),
        }
    }

    /// Detach observers and remove every rendered tile
    pub fn destroy(&mut self) {
        self.detach();
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(mut controller) = slot.take() {
                    controller.teardown();
                }
            }
            Err(_) => wasm_warn!("Gallery busy; destroy skipped"),
        }
    }
}

impl MasonryGallery {
    fn create(container_id: &str, items: Vec<GalleryItem>, config: MasonryConfig) -> Result<Self, GalleryError> {
        let window = browser_window()?;
        let document = window
            .document()
            .ok_or_else(|| GalleryError::MissingElement("document".to_string()))?;
        let container = find_container(&document, container_id)?;

        let slot: Slot = Rc::new(RefCell::new(None));
        let sink = event_sink(&window, &slot);

        let animator = match config.animator {
            AnimatorKind::Gsap => {
                if !gsap_available() {
                    return Err(GalleryError::DependencyNotReady(GSAP.to_string()));
                }
                WebAnimator::Gsap(GsapAnimator::new())
            }
            AnimatorKind::Builtin => {
                WebAnimator::Builtin(StyleAnimator::new(window.clone(), frame_sink(&window, &slot)))
            }
        };

        let visibility = config.visibility.clone();
        let surface = DomSurface::new(window.clone(), document, container.clone(), sink.clone());
        let scheduler = WebScheduler::new(window.clone(), sink.clone());
        let controller = MasonryController::new(items, config, surface, animator, scheduler)?;
        *slot.borrow_mut() = Some(controller);

        let mut gallery = Self {
            slot,
            window,
            observer: None,
            on_intersect: None,
            on_resize: None,
        };
        gallery.observe(&container, &visibility, sink.clone())?;
        gallery.listen_for_resize(sink);
        gallery.with_controller(|controller| controller.preload_images());

        wasm_info!("Gallery #{} started", container_id);
        Ok(gallery)
    }

    fn observe(
        &mut self,
        container: &HtmlElement,
        options: &VisibilityOptions,
        sink: EventSink,
    ) -> Result<(), GalleryError> {
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        sink(GalleryEvent::Visibility(entry.is_intersecting()));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
            .map_err(|e| {
                wasm_error!("IntersectionObserver unavailable: {:?}", e);
                GalleryError::DependencyNotReady("IntersectionObserver".to_string())
            })?;
        observer.observe(container);

        self.observer = Some(observer);
        self.on_intersect = Some(on_intersect);
        Ok(())
    }

    fn listen_for_resize(&mut self, sink: EventSink) {
        let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| sink(GalleryEvent::Resize));
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            wasm_warn!("Could not listen for resize: {:?}", e);
            return;
        }
        self.on_resize = Some(on_resize);
    }

    /// Disconnect the observer and the resize listener
    fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.on_intersect = None;
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
    }

    fn with_controller(&self, f: impl FnOnce(&mut WebController)) {
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(controller) = slot.as_mut() {
                    f(controller);
                }
            }
            Err(_) => wasm_warn!("Gallery busy; call ignored"),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&WebController) -> R) -> Option<R> {
        let slot = self.slot.try_borrow().ok()?;
        slot.as_ref().map(f)
    }
}

impl Drop for MasonryGallery {
    fn drop(&mut self) {
        self.detach();
    }
}

// ============================================================================
// initGallery
// ============================================================================

struct PendingGallery {
    container_id: String,
    items: Vec<GalleryItem>,
    config: MasonryConfig,
    poll: DependencyPoll,
}

/// Start a gallery on `#containerId` once GSAP is loaded
///
/// Pages without the container are left alone, so one bundle can be
/// included everywhere. The gallery is kept alive for the page lifetime.
#[wasm_bindgen(js_name = initGallery)]
pub fn init_gallery(container_id: String, items: JsValue, options: JsValue) -> Result<(), JsValue> {
    let items = parse_items(items).map_err(gallery_error)?;
    let config = parse_config(options).map_err(gallery_error)?;
    let window = browser_window().map_err(gallery_error)?;

    let has_container = window
        .document()
        .and_then(|document| document.get_element_by_id(&container_id))
        .is_some();
    if !has_container {
        wasm_log!("No #{} on this page; gallery not started", container_id);
        return Ok(());
    }

    let poll = DependencyPoll::new(GSAP, config.dependency_poll_ms, config.dependency_max_attempts);
    start_when_ready(
        window,
        PendingGallery {
            container_id,
            items,
            config,
            poll,
        },
    );
    Ok(())
}

fn start_when_ready(window: Window, mut pending: PendingGallery) {
    let available = pending.config.animator == AnimatorKind::Builtin || gsap_available();
    match pending.poll.poll(available) {
        PollOutcome::Ready => {
            let PendingGallery {
                container_id,
                items,
                config,
                ..
            } = pending;
            match MasonryGallery::create(&container_id, items, config) {
                Ok(gallery) => GALLERIES.with(|galleries| galleries.borrow_mut().push(gallery)),
                Err(GalleryError::MissingElement(what)) => {
                    wasm_log!("Gallery #{} not started: {} is missing", container_id, what)
                }
                Err(e) => wasm_error!("Gallery #{} not started: {}", container_id, e),
            }
        }
        PollOutcome::RetryAfter(delay_ms) => {
            let retry_window = window.clone();
            call_later(&window, delay_ms, move || start_when_ready(retry_window, pending));
        }
        PollOutcome::GaveUp => {
            wasm_warn!("Gallery #{} not started: {} never loaded", pending.container_id, GSAP)
        }
    }
}
