//! Animation Controller
//!
//! Owns one gallery instance: image preloading, layout invalidation,
//! rendering, entrance/exit sequencing and hover. Everything is driven by
//! [`GalleryEvent`]s delivered one at a time by the host's event loop.

pub mod host;
pub mod timers;
pub mod preload;
pub mod hover;
pub mod gallery;

pub use gallery::MasonryController;
pub use host::{ImageOutcome, ItemNodes, RenderOptions, Scheduler, Surface};
pub use preload::PreloadBatch;
pub use timers::{TimerGenerations, TimerKind, TimerToken};

/// Everything the host reports back to a gallery
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    ImageSettled { index: usize, outcome: ImageOutcome },
    /// Container entered (`true`) or left (`false`) the viewport
    Visibility(bool),
    Resize,
    HoverStart(String),
    HoverEnd(String),
    Timer(TimerToken),
}
