#![forbid(unsafe_code)]

//! Easing curves mapping linear progress in `[0, 1]` to eased progress.
//!
//! The curves are the classic Penner equations in the form popularized by
//! Clutter. Every curve maps `0 → 0` and `1 → 1` exactly: [`ease`] clamps its
//! input and pins both endpoints, so floating-point drift in the piecewise
//! bounce and elastic formulas never leaks into a finished animation.
//!
//! Back and elastic curves overshoot `[0, 1]` in between; callers that need a
//! bounded value must clamp themselves.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

use crate::error::MotionError;

/// Overshoot amount for the back curves.
const BACK_OVERSHOOT: f64 = 1.70158;

/// An easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 31] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::EaseInOutExpo,
        Self::EaseInCirc,
        Self::EaseOutCirc,
        Self::EaseInOutCirc,
        Self::EaseInElastic,
        Self::EaseOutElastic,
        Self::EaseInOutElastic,
        Self::EaseInBack,
        Self::EaseOutBack,
        Self::EaseInOutBack,
        Self::EaseInBounce,
        Self::EaseOutBounce,
        Self::EaseInOutBounce,
    ];

    /// Apply the curve to `t`. See [`ease`].
    #[inline]
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        ease(self, t)
    }

    /// Stable kebab-case name, e.g. `"ease-out-bounce"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease-in-quad",
            Self::EaseOutQuad => "ease-out-quad",
            Self::EaseInOutQuad => "ease-in-out-quad",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::EaseInQuart => "ease-in-quart",
            Self::EaseOutQuart => "ease-out-quart",
            Self::EaseInOutQuart => "ease-in-out-quart",
            Self::EaseInQuint => "ease-in-quint",
            Self::EaseOutQuint => "ease-out-quint",
            Self::EaseInOutQuint => "ease-in-out-quint",
            Self::EaseInSine => "ease-in-sine",
            Self::EaseOutSine => "ease-out-sine",
            Self::EaseInOutSine => "ease-in-out-sine",
            Self::EaseInExpo => "ease-in-expo",
            Self::EaseOutExpo => "ease-out-expo",
            Self::EaseInOutExpo => "ease-in-out-expo",
            Self::EaseInCirc => "ease-in-circ",
            Self::EaseOutCirc => "ease-out-circ",
            Self::EaseInOutCirc => "ease-in-out-circ",
            Self::EaseInElastic => "ease-in-elastic",
            Self::EaseOutElastic => "ease-out-elastic",
            Self::EaseInOutElastic => "ease-in-out-elastic",
            Self::EaseInBack => "ease-in-back",
            Self::EaseOutBack => "ease-out-back",
            Self::EaseInOutBack => "ease-in-out-back",
            Self::EaseInBounce => "ease-in-bounce",
            Self::EaseOutBounce => "ease-out-bounce",
            Self::EaseInOutBounce => "ease-in-out-bounce",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MotionError::unknown_easing(wanted))
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map linear progress `t` through `easing`.
///
/// `t` is clamped to `[0, 1]`; `0` and `1` map to exactly `0.0` and `1.0`.
#[must_use]
pub fn ease(easing: Easing, t: f64) -> f64 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    match easing {
        Easing::Linear => t,
        Easing::EaseInQuad => t * t,
        Easing::EaseOutQuad => -t * (t - 2.0),
        Easing::EaseInOutQuad => {
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * p * p
            } else {
                let p = p - 1.0;
                -0.5 * (p * (p - 2.0) - 1.0)
            }
        }
        Easing::EaseInCubic => t * t * t,
        Easing::EaseOutCubic => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::EaseInOutCubic => {
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * p * p * p
            } else {
                let p = p - 2.0;
                0.5 * (p * p * p + 2.0)
            }
        }
        Easing::EaseInQuart => t.powi(4),
        Easing::EaseOutQuart => {
            let p = t - 1.0;
            -(p.powi(4) - 1.0)
        }
        Easing::EaseInOutQuart => {
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * p.powi(4)
            } else {
                let p = p - 2.0;
                -0.5 * (p.powi(4) - 2.0)
            }
        }
        Easing::EaseInQuint => t.powi(5),
        Easing::EaseOutQuint => {
            let p = t - 1.0;
            p.powi(5) + 1.0
        }
        Easing::EaseInOutQuint => {
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * p.powi(5)
            } else {
                let p = p - 2.0;
                0.5 * (p.powi(5) + 2.0)
            }
        }
        Easing::EaseInSine => 1.0 - (t * FRAC_PI_2).cos(),
        Easing::EaseOutSine => (t * FRAC_PI_2).sin(),
        Easing::EaseInOutSine => -0.5 * ((PI * t).cos() - 1.0),
        Easing::EaseInExpo => 2f64.powf(10.0 * (t - 1.0)),
        Easing::EaseOutExpo => 1.0 - 2f64.powf(-10.0 * t),
        Easing::EaseInOutExpo => {
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * 2f64.powf(10.0 * (p - 1.0))
            } else {
                0.5 * (2.0 - 2f64.powf(-10.0 * (p - 1.0)))
            }
        }
        Easing::EaseInCirc => 1.0 - (1.0 - t * t).sqrt(),
        Easing::EaseOutCirc => {
            let p = t - 1.0;
            (1.0 - p * p).sqrt()
        }
        Easing::EaseInOutCirc => {
            let p = t * 2.0;
            if p < 1.0 {
                -0.5 * ((1.0 - p * p).sqrt() - 1.0)
            } else {
                let p = p - 2.0;
                0.5 * ((1.0 - p * p).sqrt() + 1.0)
            }
        }
        Easing::EaseInElastic => {
            let period = 0.3;
            let s = period / 4.0;
            let q = t - 1.0;
            -(2f64.powf(10.0 * q) * ((q - s) * TAU / period).sin())
        }
        Easing::EaseOutElastic => {
            let period = 0.3;
            let s = period / 4.0;
            2f64.powf(-10.0 * t) * ((t - s) * TAU / period).sin() + 1.0
        }
        Easing::EaseInOutElastic => {
            let period = 0.3 * 1.5;
            let s = period / 4.0;
            let q = t * 2.0 - 1.0;
            if q < 0.0 {
                -0.5 * (2f64.powf(10.0 * q) * ((q - s) * TAU / period).sin())
            } else {
                2f64.powf(-10.0 * q) * ((q - s) * TAU / period).sin() * 0.5 + 1.0
            }
        }
        Easing::EaseInBack => t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT),
        Easing::EaseOutBack => {
            let p = t - 1.0;
            p * p * ((BACK_OVERSHOOT + 1.0) * p + BACK_OVERSHOOT) + 1.0
        }
        Easing::EaseInOutBack => {
            let s = BACK_OVERSHOOT * 1.525;
            let p = t * 2.0;
            if p < 1.0 {
                0.5 * (p * p * ((s + 1.0) * p - s))
            } else {
                let p = p - 2.0;
                0.5 * (p * p * ((s + 1.0) * p + s) + 2.0)
            }
        }
        Easing::EaseInBounce => 1.0 - bounce_out(1.0 - t),
        Easing::EaseOutBounce => bounce_out(t),
        Easing::EaseInOutBounce => {
            if t < 0.5 {
                (1.0 - bounce_out(1.0 - t * 2.0)) * 0.5
            } else {
                bounce_out(t * 2.0 - 1.0) * 0.5 + 0.5
            }
        }
    }
}

/// Piecewise parabolic bounce; the break points are multiples of `1/2.75`.
fn bounce_out(p: f64) -> f64 {
    const K: f64 = 7.5625;
    if p < 1.0 / 2.75 {
        K * p * p
    } else if p < 2.0 / 2.75 {
        let p = p - 1.5 / 2.75;
        K * p * p + 0.75
    } else if p < 2.5 / 2.75 {
        let p = p - 2.25 / 2.75;
        K * p * p + 0.9375
    } else {
        let p = p - 2.625 / 2.75;
        K * p * p + 0.984375
    }
}
