//! Lifecycle flags and phases of one gallery instance

use serde::Serialize;

/// Gates which animation path runs
///
/// The flags form a chain: `has_animated` implies `has_mounted`, which implies
/// `images_ready`. The setters refuse transitions that would break it.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationLifecycleFlags {
    images_ready: bool,
    has_mounted: bool,
    has_animated: bool,
}

impl AnimationLifecycleFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images_ready(&self) -> bool {
        self.images_ready
    }

    pub fn has_mounted(&self) -> bool {
        self.has_mounted
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    pub fn mark_images_ready(&mut self) {
        self.images_ready = true;
    }

    /// Record the first layout render; ignored before images are ready
    pub fn mark_mounted(&mut self) -> bool {
        if self.images_ready {
            self.has_mounted = true;
        }
        self.has_mounted
    }

    /// Record that the entrance fired; ignored before the first render
    pub fn mark_animated(&mut self) -> bool {
        if self.has_mounted {
            self.has_animated = true;
        }
        self.has_animated
    }

    /// Visibility exit: the next entry replays the full entrance
    pub fn reset_animation(&mut self) {
        self.has_animated = false;
    }

    pub fn is_consistent(&self) -> bool {
        (!self.has_animated || self.has_mounted) && (!self.has_mounted || self.images_ready)
    }
}

/// Coarse state of a gallery instance
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GalleryPhase {
    /// Waiting for images
    #[default]
    Loading,
    /// Rendered, items parked in their pre-entrance pose
    ReadyHidden,
    /// Entrance timeline running
    Entering,
    /// Items at rest
    Settled,
}
