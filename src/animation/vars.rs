//! Property bags handed to the animation primitive

use serde::Serialize;

use super::easing::Ease;

/// Numeric style properties the gallery animates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    X,
    Y,
    Width,
    Height,
    Scale,
    /// Gaussian blur radius in pixels (`filter: blur(..)`)
    Blur,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Opacity,
        Property::X,
        Property::Y,
        Property::Width,
        Property::Height,
        Property::Scale,
        Property::Blur,
    ];

    /// Value of an element nobody has touched yet
    pub fn initial_value(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// Target values for a set of properties; `None` leaves a property alone
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
}

impl TweenVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn blur(mut self, radius: f64) -> Self {
        self.blur = Some(radius);
        self
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Width => self.width,
            Property::Height => self.height,
            Property::Scale => self.scale,
            Property::Blur => self.blur,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Width => &mut self.width,
            Property::Height => &mut self.height,
            Property::Scale => &mut self.scale,
            Property::Blur => &mut self.blur,
        };
        *slot = Some(value);
    }

    /// Properties that carry a value, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        Property::ALL
            .iter()
            .filter_map(move |p| self.get(*p).map(|v| (*p, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// Timing of a tween
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
    /// Seconds before the tween starts
    pub delay: f64,
}

impl Motion {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, ease, delay: 0.0 }
    }

    pub fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}
