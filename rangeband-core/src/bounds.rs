//! Bounds — the inclusive numeric interval a slider selects within.

use serde::{Deserialize, Serialize};

/// Inclusive interval `[min, max]` a slider's thumbs move inside.
///
/// Plain data; the invariants (`min < max`, and `min > 0` for logarithmic
/// sliders) are enforced once by [`crate::slider::SliderConfig::new`], not on
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True if `value` lies inside the interval (endpoints included).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
