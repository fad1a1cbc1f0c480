//! Gallery configuration
//!
//! Every option has a default matching the production page, so an empty
//! options object from JavaScript yields a working gallery.

use serde::{Deserialize, Serialize};

use crate::animation::easing::Ease;
use crate::error::GalleryError;

/// Where items fly in from on entrance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimateFrom {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    Center,
    /// One of top/bottom/left/right, picked per item
    Random,
    /// Any other value: start slightly below the resting position
    #[serde(other)]
    InPlace,
}

/// Which tweening primitive drives the tiles
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimatorKind {
    /// The page's global `gsap` object
    #[default]
    Gsap,
    /// The crate's own tween engine, stepped on animation frames
    Builtin,
}

/// IntersectionObserver settings for the container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityOptions {
    /// Fraction of the container that must be visible
    pub threshold: f64,
    /// Early-trigger margin around the viewport, in pixels
    pub root_margin_px: f64,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 50.0,
        }
    }
}

impl VisibilityOptions {
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Options of one gallery instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MasonryConfig {
    /// Easing of entrance and resize transitions
    pub ease: Ease,

    /// Resize transition duration (seconds)
    pub duration: f64,

    /// Entrance duration per item (seconds)
    pub entrance_duration: f64,

    /// Delay between consecutive items (seconds)
    pub stagger: f64,

    pub animate_from: AnimateFrom,

    pub scale_on_hover: bool,
    pub hover_scale: f64,

    /// Start items blurred and sharpen them during the entrance
    pub blur_to_focus: bool,

    /// Fade a gradient overlay in on hover
    pub color_shift_on_hover: bool,

    /// Quiet period before a resize relayouts
    pub resize_debounce_ms: u32,

    /// Delay before retrying a layout when the container has no width
    pub layout_retry_ms: u32,

    /// Polling interval while waiting for the animation primitive
    pub dependency_poll_ms: u32,

    /// Give up waiting after this many polls (`None` polls forever)
    pub dependency_max_attempts: Option<u32>,

    pub visibility: VisibilityOptions,

    pub animator: AnimatorKind,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            ease: Ease::default(),
            duration: 0.6,
            entrance_duration: 1.5,
            stagger: 0.05,
            animate_from: AnimateFrom::Bottom,
            scale_on_hover: true,
            hover_scale: 0.95,
            blur_to_focus: true,
            color_shift_on_hover: false,
            resize_debounce_ms: 250,
            layout_retry_ms: 100,
            dependency_poll_ms: 100,
            dependency_max_attempts: Some(600),
            visibility: VisibilityOptions::default(),
            animator: AnimatorKind::Gsap,
        }
    }
}

impl MasonryConfig {
    pub fn validate(&self) -> Result<(), GalleryError> {
        let non_negative = [
            ("duration", self.duration),
            ("entranceDuration", self.entrance_duration),
            ("stagger", self.stagger),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GalleryError::InvalidOptions(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.hover_scale.is_finite() || self.hover_scale <= 0.0 {
            return Err(GalleryError::InvalidOptions(format!(
                "hoverScale must be positive, got {}",
                self.hover_scale
            )));
        }

        if !(0.0..=1.0).contains(&self.visibility.threshold) {
            return Err(GalleryError::InvalidOptions(format!(
                "visibility.threshold must be within [0, 1], got {}",
                self.visibility.threshold
            )));
        }

        Ok(())
    }

    /// Total entrance time for `count` items, in milliseconds
    pub fn entrance_total_ms(&self, count: usize) -> u32 {
        let last_delay = count.saturating_sub(1) as f64 * self.stagger;
        ((last_delay + self.entrance_duration) * 1000.0).round() as u32
    }
}
