//! Scale — percent↔value mapping along the slider track.
//!
//! Log scale: `percent = (ln v − ln min) / (ln max − ln min) · 100`.
//! Equal track distance per order of magnitude, so a domain like €50K–€50M
//! stays fine-grained at the low end and coarse at the high end.
//! Linear scale: percent proportional to the offset from `min`.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;

/// How track position maps to domain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Track position of `value`, in percent of the full track.
    ///
    /// Monotonically increasing in `value`; `bounds.min` maps to 0 and
    /// `bounds.max` to 100 exactly. The log branch requires `bounds.min > 0`,
    /// which [`crate::slider::SliderConfig::new`] guarantees up front.
    pub fn percent_of(&self, bounds: Bounds, value: f64) -> f64 {
        match self {
            Scale::Linear => (value - bounds.min) / bounds.span() * 100.0,
            Scale::Log => {
                let lo = bounds.min.ln();
                let hi = bounds.max.ln();
                (value.ln() - lo) / (hi - lo) * 100.0
            }
        }
    }

    /// Value at track position `percent`.
    ///
    /// Inverse of [`Scale::percent_of`] on `[0, 100]` up to floating-point
    /// rounding. Percents outside `[0, 100]` are not rejected: the mapping
    /// extrapolates past the bounds, and callers wanting containment clamp or
    /// snap the result themselves.
    pub fn value_at(&self, bounds: Bounds, percent: f64) -> f64 {
        match self {
            Scale::Linear => bounds.min + percent / 100.0 * bounds.span(),
            Scale::Log => {
                let lo = bounds.min.ln();
                let hi = bounds.max.ln();
                (lo + percent / 100.0 * (hi - lo)).exp()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx;

    const MONEY: Bounds = Bounds {
        min: 50_000.0,
        max: 50_000_000.0,
    };

    #[test]
    fn endpoints_map_to_0_and_100() {
        for scale in [Scale::Linear, Scale::Log] {
            assert_eq!(scale.percent_of(MONEY, MONEY.min), 0.0);
            assert_eq!(scale.percent_of(MONEY, MONEY.max), 100.0);
        }
    }

    #[test]
    fn log_midpoint_is_geometric_mean() {
        // Halfway along a log track sits the geometric mean of the bounds:
        // sqrt(50e3 * 50e6) ≈ 1_581_138.83
        let mid = Scale::Log.value_at(MONEY, 50.0);
        assert_approx(mid, (MONEY.min * MONEY.max).sqrt(), 1e-6);
    }

    #[test]
    fn linear_midpoint_is_arithmetic_mean() {
        let b = Bounds::new(0.0, 5_000_000.0);
        assert_approx(Scale::Linear.value_at(b, 50.0), 2_500_000.0, 1e-9);
    }

    #[test]
    fn roundtrip_log() {
        for v in [50_000.0, 120_000.0, 999_999.0, 5_000_000.0, 50_000_000.0] {
            let p = Scale::Log.percent_of(MONEY, v);
            let back = Scale::Log.value_at(MONEY, p);
            assert_approx(back / v, 1.0, 1e-12);
        }
    }

    #[test]
    fn roundtrip_linear() {
        let b = Bounds::new(0.0, 5_000_000.0);
        for v in [0.0, 1.0, 333_333.0, 4_999_999.0, 5_000_000.0] {
            let p = Scale::Linear.percent_of(b, v);
            assert_approx(Scale::Linear.value_at(b, p), v, 1e-6);
        }
    }

    #[test]
    fn log_is_monotonic() {
        let values = [50_000.0, 60_000.0, 100_000.0, 1_000_000.0, 49_999_999.0];
        let mut prev = f64::NEG_INFINITY;
        for v in values {
            let p = Scale::Log.percent_of(MONEY, v);
            assert!(p > prev, "percent_of not increasing at {v}");
            prev = p;
        }
    }

    #[test]
    fn out_of_range_percent_extrapolates() {
        // No rejection, no clamp: 200% on a log track is max²/min.
        let v = Scale::Log.value_at(MONEY, 200.0);
        assert!(v > MONEY.max);
        let w = Scale::Linear.value_at(Bounds::new(0.0, 100.0), -10.0);
        assert_eq!(w, -10.0);
    }
}
