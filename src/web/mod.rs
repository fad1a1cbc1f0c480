//! Browser host
//!
//! Implements the controller seams on top of `web-sys`: [`dom::DomSurface`]
//! renders tiles, [`scheduler::WebScheduler`] runs timers on `setTimeout`,
//! and [`animator::WebAnimator`] tweens either through GSAP or the built-in
//! engine. [`gallery::MasonryGallery`] wires them to one container.

pub mod animator;
pub mod builtin;
pub mod dom;
pub mod gallery;
pub mod gsap;
pub mod scheduler;

use std::rc::Rc;

use crate::controller::GalleryEvent;

/// Delivers host events back into a gallery
pub type EventSink = Rc<dyn Fn(GalleryEvent)>;

pub use gallery::{init_gallery, MasonryGallery};
