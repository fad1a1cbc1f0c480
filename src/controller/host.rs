//! Seams between the controller and its host environment
//!
//! In the browser these are backed by `web-sys`; tests use recording fakes.

use crate::error::GalleryError;
use crate::models::{PlacedItem, Size};

use super::timers::TimerToken;

/// Handles of the nodes rendered for one item
///
/// The controller keeps these directly instead of re-querying the DOM by
/// selector, so a re-render can never retarget a stale lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemNodes<N> {
    pub wrapper: N,
    pub overlay: Option<N>,
    pub description: Option<N>,
}

impl<N> ItemNodes<N> {
    pub fn new(wrapper: N) -> Self {
        Self {
            wrapper,
            overlay: None,
            description: None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        std::iter::once(&self.wrapper)
            .chain(self.overlay.iter())
            .chain(self.description.iter())
    }
}

/// What to build inside each wrapper
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Add the gradient overlay used by colour-shift hover
    pub color_overlay: bool,
}

/// How an image request ended; both count as ready
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// DOM geometry, rendering and image loading
pub trait Surface {
    type Node;

    fn viewport_size(&self) -> Size;

    /// Laid-out width of the container, `None` if unknown
    fn container_width(&self) -> Option<f64>;

    /// Laid-out width of the container's parent, `None` if unknown
    fn parent_width(&self) -> Option<f64>;

    /// Bounding box of the container
    fn container_rect(&self) -> Option<Size>;

    fn set_container_height(&mut self, height: f64);

    /// Start loading an image; completion comes back as `GalleryEvent::ImageSettled`
    fn load_image(&mut self, index: usize, src: &str);

    /// Remove every rendered item
    fn clear(&mut self);

    /// Render one item at `index`; `MissingElement` means the item is skipped
    fn mount_item(
        &mut self,
        index: usize,
        placed: &PlacedItem,
        options: &RenderOptions,
    ) -> Result<ItemNodes<Self::Node>, GalleryError>;
}

/// One-shot timers; expiry comes back as `GalleryEvent::Timer`
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, token: TimerToken);
}
