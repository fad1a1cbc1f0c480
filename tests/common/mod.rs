//! Recording fakes for the controller's host seams

#![allow(dead_code)]

use std::collections::HashSet;

use masonry_gallery_wasm::animation::TweenEngine;
use masonry_gallery_wasm::controller::{
    GalleryEvent, ImageOutcome, ItemNodes, MasonryController, RenderOptions, Scheduler, Surface,
    TimerKind, TimerToken,
};
use masonry_gallery_wasm::{GalleryError, GalleryItem, MasonryConfig, PlacedItem, Size};

pub type TestController = MasonryController<FakeSurface, TweenEngine<u32>, RecordingScheduler>;

/// In-memory surface handing out numeric node handles
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub viewport: Size,
    pub container_width: Option<f64>,
    pub parent_width: Option<f64>,
    pub container_rect: Option<Size>,
    pub container_height: Option<f64>,
    pub loads: Vec<(usize, String)>,
    pub clears: usize,
    /// Ids mounted by the latest render
    pub mounted: Vec<String>,
    /// Ids whose mount reports a missing element
    pub missing: HashSet<String>,
    next_node: u32,
}

impl FakeSurface {
    /// Viewport and container of the given width, container 1000px tall
    pub fn with_width(width: f64, viewport_height: f64) -> Self {
        Self {
            viewport: Size::new(width, viewport_height),
            container_width: Some(width),
            parent_width: Some(width),
            container_rect: Some(Size::new(width, 1000.0)),
            ..Self::default()
        }
    }

    fn node(&mut self) -> u32 {
        self.next_node += 1;
        self.next_node
    }
}

impl Surface for FakeSurface {
    type Node = u32;

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    fn parent_width(&self) -> Option<f64> {
        self.parent_width
    }

    fn container_rect(&self) -> Option<Size> {
        self.container_rect
    }

    fn set_container_height(&mut self, height: f64) {
        self.container_height = Some(height);
    }

    fn load_image(&mut self, index: usize, src: &str) {
        self.loads.push((index, src.to_string()));
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.mounted.clear();
    }

    fn mount_item(
        &mut self,
        _index: usize,
        placed: &PlacedItem,
        options: &RenderOptions,
    ) -> Result<ItemNodes<u32>, GalleryError> {
        if self.missing.contains(placed.id()) {
            return Err(GalleryError::MissingElement(format!("wrapper of {}", placed.id())));
        }
        let mut nodes = ItemNodes::new(self.node());
        if options.color_overlay {
            nodes.overlay = Some(self.node());
        }
        if placed.item.description.is_some() {
            nodes.description = Some(self.node());
        }
        self.mounted.push(placed.id().to_string());
        Ok(nodes)
    }
}

/// Scheduler that only records; tests fire timers by hand
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pub scheduled: Vec<(u32, TimerToken)>,
}

impl RecordingScheduler {
    pub fn of_kind(&self, kind: TimerKind) -> Vec<(u32, TimerToken)> {
        self.scheduled
            .iter()
            .copied()
            .filter(|(_, token)| token.kind == kind)
            .collect()
    }
}

impl Scheduler for RecordingScheduler {
    fn schedule(&mut self, delay_ms: u32, token: TimerToken) {
        self.scheduled.push((delay_ms, token));
    }
}

/// The seven tiles of the production gallery page
pub fn production_items() -> Vec<GalleryItem> {
    [400.0, 250.0, 600.0, 350.0, 450.0, 300.0, 380.0]
        .iter()
        .enumerate()
        .map(|(i, height)| {
            let n = i + 1;
            GalleryItem::new(n.to_string(), format!("/images/n{}.jpg", n), format!("https://example.com/{}", n), *height)
        })
        .collect()
}

pub fn controller(items: Vec<GalleryItem>, config: MasonryConfig, surface: FakeSurface) -> TestController {
    MasonryController::new(items, config, surface, TweenEngine::new(), RecordingScheduler::default())
        .expect("valid gallery")
}

/// 1200px wide page, 800px tall viewport, default options
pub fn production_controller() -> TestController {
    controller(production_items(), MasonryConfig::default(), FakeSurface::with_width(1200.0, 800.0))
}

/// Report every requested image as loaded
pub fn load_all(controller: &mut TestController) {
    let indexes: Vec<usize> = controller.surface().loads.iter().map(|(index, _)| *index).collect();
    for index in indexes {
        controller.handle(GalleryEvent::ImageSettled {
            index,
            outcome: ImageOutcome::Loaded,
        });
    }
}

/// Preload, settle every image and return the ready controller
pub fn ready(mut controller: TestController) -> TestController {
    controller.preload_images();
    load_all(&mut controller);
    controller
}

/// Fire the most recently scheduled timer of `kind`
pub fn fire_latest(controller: &mut TestController, kind: TimerKind) {
    let token = controller
        .scheduler()
        .of_kind(kind)
        .last()
        .map(|(_, token)| *token)
        .expect("a timer of that kind was scheduled");
    controller.handle(GalleryEvent::Timer(token));
}

pub fn wrapper(controller: &TestController, id: &str) -> u32 {
    controller.nodes_of(id).expect("item rendered").wrapper
}
