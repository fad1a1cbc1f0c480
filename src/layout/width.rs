//! Container width fallback chain

use crate::error::GalleryError;

/// Horizontal page padding subtracted when only the viewport width is known
pub const VIEWPORT_GUTTER: f64 = 40.0;

/// Where a resolved width came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthSource {
    Container,
    Parent,
    Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedWidth {
    pub width: f64,
    pub source: WidthSource,
}

fn usable(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

/// Pick the first usable width: container, then parent, then viewport minus gutter
///
/// Zero, negative and non-finite measurements count as unavailable, so no
/// degenerate width ever reaches the column division.
pub fn resolve_container_width(
    container: Option<f64>,
    parent: Option<f64>,
    viewport_width: f64,
) -> Result<ResolvedWidth, GalleryError> {
    if let Some(width) = usable(container) {
        return Ok(ResolvedWidth { width, source: WidthSource::Container });
    }
    if let Some(width) = usable(parent) {
        return Ok(ResolvedWidth { width, source: WidthSource::Parent });
    }
    match usable(Some(viewport_width - VIEWPORT_GUTTER)) {
        Some(width) => Ok(ResolvedWidth { width, source: WidthSource::Viewport }),
        None => Err(GalleryError::DegenerateLayoutInput),
    }
}

/// Accept a caller-supplied width only if it is usable for division
pub fn checked_width(width: f64) -> Result<f64, GalleryError> {
    usable(Some(width)).ok_or(GalleryError::DegenerateLayoutInput)
}
