//! DOM-backed `Surface`
//!
//! Renders each item as
//!
//! ```text
//! div.item-wrapper[data-key=id]
//! ├── div.item-img            (background image)
//! │   └── div.color-overlay   (only with colour-shift hover)
//! └── div.item-description    (only when the item has one)
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, Window};

use crate::controller::{GalleryEvent, ImageOutcome, ItemNodes, RenderOptions, Surface};
use crate::error::GalleryError;
use crate::models::{PlacedItem, Size};

use super::scheduler::defer;
use super::EventSink;

const OVERLAY_GRADIENT: &str = "linear-gradient(45deg, rgba(255,0,150,0.5), rgba(0,150,255,0.5))";

/// A rendered element with a stable identity for tween bookkeeping
#[derive(Clone, Debug)]
pub struct DomNode {
    id: u32,
    element: HtmlElement,
}

impl DomNode {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DomNode {}

impl std::hash::Hash for DomNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

pub struct DomSurface {
    window: Window,
    document: Document,
    container: HtmlElement,
    sink: EventSink,
    next_node_id: u32,
    item_listeners: Vec<Closure<dyn FnMut(Event)>>,
    image_loads: Vec<(HtmlImageElement, Closure<dyn FnMut(Event)>)>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document, container: HtmlElement, sink: EventSink) -> Self {
        Self {
            window,
            document,
            container,
            sink,
            next_node_id: 0,
            item_listeners: Vec::new(),
            image_loads: Vec::new(),
        }
    }

    fn create_div(&self, class: &str) -> Result<HtmlElement, GalleryError> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| GalleryError::MissingElement(format!("div.{} ({:?})", class, e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GalleryError::MissingElement(format!("div.{}", class)))?;
        element.set_class_name(class);
        Ok(element)
    }

    fn node(&mut self, element: HtmlElement) -> DomNode {
        self.next_node_id = self.next_node_id.wrapping_add(1);
        DomNode { id: self.next_node_id, element }
    }

    fn listen(&mut self, target: &HtmlElement, event: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("Could not attach {} listener: {:?}", event, e);
            return;
        }
        self.item_listeners.push(closure);
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        // Loads still in flight must not call into freed closures
        for (image, _) in &self.image_loads {
            image.set_onload(None);
            image.set_onerror(None);
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("Could not set {}: {:?}", property, e);
    }
}

fn js_f64(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Surface for DomSurface {
    type Node = DomNode;

    fn viewport_size(&self) -> Size {
        Size::new(js_f64(self.window.inner_width()), js_f64(self.window.inner_height()))
    }

    fn container_width(&self) -> Option<f64> {
        Some(self.container.offset_width() as f64)
    }

    fn parent_width(&self) -> Option<f64> {
        self.container
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map(|parent| parent.offset_width() as f64)
    }

    fn container_rect(&self) -> Option<Size> {
        let rect = self.container.get_bounding_client_rect();
        Some(Size::new(rect.width(), rect.height()))
    }

    fn set_container_height(&mut self, height: f64) {
        set_style(&self.container, "height", &format!("{}px", height));
    }

    fn load_image(&mut self, index: usize, src: &str) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Could not create image for {}: {:?}", src, e);
                defer(
                    &self.window,
                    self.sink.clone(),
                    GalleryEvent::ImageSettled { index, outcome: ImageOutcome::Failed },
                );
                return;
            }
        };

        let sink = self.sink.clone();
        let on_settle = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let outcome = if event.type_() == "error" {
                ImageOutcome::Failed
            } else {
                ImageOutcome::Loaded
            };
            sink(GalleryEvent::ImageSettled { index, outcome });
        });
        image.set_onload(Some(on_settle.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_settle.as_ref().unchecked_ref()));
        image.set_src(src);
        self.image_loads.push((image, on_settle));
    }

    fn clear(&mut self) {
        self.container.set_inner_html("");
        self.item_listeners.clear();
    }

    fn mount_item(
        &mut self,
        _index: usize,
        placed: &PlacedItem,
        options: &RenderOptions,
    ) -> Result<ItemNodes<DomNode>, GalleryError> {
        let id = placed.id().to_string();

        let wrapper = self.create_div("item-wrapper")?;
        wrapper
            .set_attribute("data-key", &id)
            .map_err(|_| GalleryError::MissingElement(format!("data-key on {}", id)))?;
        set_style(&wrapper, "cursor", "pointer");

        let image = self.create_div("item-img")?;
        set_style(&image, "background-image", &format!("url({})", placed.item.img));

        let overlay = if options.color_overlay {
            let overlay = self.create_div("color-overlay")?;
            for (property, value) in [
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("height", "100%"),
                ("background", OVERLAY_GRADIENT),
                ("opacity", "0"),
                ("pointer-events", "none"),
                ("border-radius", "8px"),
            ] {
                set_style(&overlay, property, value);
            }
            image
                .append_child(&overlay)
                .map_err(|_| GalleryError::MissingElement(format!("overlay of {}", id)))?;
            Some(overlay)
        } else {
            None
        };

        wrapper
            .append_child(&image)
            .map_err(|_| GalleryError::MissingElement(format!("image of {}", id)))?;

        let description = match placed.item.description.as_deref() {
            Some(text) => {
                let description = self.create_div("item-description")?;
                description.set_text_content(Some(text));
                wrapper
                    .append_child(&description)
                    .map_err(|_| GalleryError::MissingElement(format!("description of {}", id)))?;
                Some(description)
            }
            None => None,
        };

        let window = self.window.clone();
        let url = placed.item.url.clone();
        self.listen(&wrapper, "click", move |_| {
            if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "noopener") {
                log::warn!("Could not open {}: {:?}", url, e);
            }
        });

        let sink = self.sink.clone();
        let hover_id = id.clone();
        self.listen(&wrapper, "mouseenter", move |_| sink(GalleryEvent::HoverStart(hover_id.clone())));

        let sink = self.sink.clone();
        let hover_id = id.clone();
        self.listen(&wrapper, "mouseleave", move |_| sink(GalleryEvent::HoverEnd(hover_id.clone())));

        self.container
            .append_child(&wrapper)
            .map_err(|_| GalleryError::MissingElement(format!("container slot for {}", id)))?;

        Ok(ItemNodes {
            wrapper: self.node(wrapper),
            overlay: overlay.map(|o| self.node(o)),
            description: description.map(|d| self.node(d)),
        })
    }
}
