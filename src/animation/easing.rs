//! Easing curves, named the way GSAP names them
//!
//! ```
//! use masonry_gallery_wasm::animation::easing::{Ease, EaseDirection};
//!
//! let ease: Ease = "power3.out".parse().unwrap();
//! assert_eq!(ease, Ease::Power(3, EaseDirection::Out));
//! assert_eq!(ease.evaluate(1.0), 1.0);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    fn suffix(self) -> &'static str {
        match self {
            EaseDirection::In => "in",
            EaseDirection::Out => "out",
            EaseDirection::InOut => "inOut",
        }
    }
}

/// Easing function mapping linear progress in [0, 1] to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// `none` / `linear` / `power0`
    Linear,
    /// `power1` .. `power4` (quad, cubic, quart, quint)
    Power(u8, EaseDirection),
    Sine(EaseDirection),
    Expo(EaseDirection),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power(3, EaseDirection::Out)
    }
}

impl Ease {
    /// Eased progress; input is clamped to [0, 1]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Ease::Linear => t,
            Ease::Power(power, direction) => apply(direction, t, |p| p.powi(power as i32 + 1)),
            Ease::Sine(direction) => apply(direction, t, |p| 1.0 - (p * PI / 2.0).cos()),
            Ease::Expo(direction) => apply(direction, t, |p| {
                if p == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * p - 10.0)
                }
            }),
        }
    }
}

/// Derive out/inOut variants from an ease-in curve
fn apply(direction: EaseDirection, t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    match direction {
        EaseDirection::In => ease_in(t),
        EaseDirection::Out => 1.0 - ease_in(1.0 - t),
        EaseDirection::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => write!(f, "none"),
            Ease::Power(power, direction) => write!(f, "power{}.{}", power, direction.suffix()),
            Ease::Sine(direction) => write!(f, "sine.{}", direction.suffix()),
            Ease::Expo(direction) => write!(f, "expo.{}", direction.suffix()),
        }
    }
}

impl FromStr for Ease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, suffix) = match s.split_once('.') {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (s, None),
        };

        // GSAP defaults to ".out" when the direction is omitted
        let direction = match suffix {
            None | Some("out") => EaseDirection::Out,
            Some("in") => EaseDirection::In,
            Some("inOut") => EaseDirection::InOut,
            Some(other) => return Err(format!("unknown ease direction `{}` in `{}`", other, s)),
        };

        match base {
            "none" | "linear" | "power0" => Ok(Ease::Linear),
            "power1" | "quad" => Ok(Ease::Power(1, direction)),
            "power2" | "cubic" => Ok(Ease::Power(2, direction)),
            "power3" | "quart" => Ok(Ease::Power(3, direction)),
            "power4" | "quint" | "strong" => Ok(Ease::Power(4, direction)),
            "sine" => Ok(Ease::Sine(direction)),
            "expo" => Ok(Ease::Expo(direction)),
            _ => Err(format!("unknown ease `{}`", s)),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}
