//! Markers — the fixed list of snap targets a slider collapses raw values onto.

use serde::{Deserialize, Serialize};

use crate::slider::ConfigError;

/// Non-empty, strictly increasing list of snap values (round numbers like
/// 50_000, 100_000, 250_000, …).
///
/// Validated once at construction; [`Markers::snap`] then always returns a
/// member of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markers(Vec<f64>);

impl Markers {
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptyMarkers);
        }
        for (index, pair) in values.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::MarkersNotAscending { index: index + 1 });
            }
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Nearest marker to `raw`.
    ///
    /// Linear scan keeping a candidate only while its distance is strictly
    /// smaller than the best so far, so an exact tie keeps the earlier (lower)
    /// marker. Lists are a handful of entries; no binary search needed.
    pub fn snap(&self, raw: f64) -> f64 {
        let mut best = self.0[0];
        let mut best_dist = (best - raw).abs();
        for &m in &self.0[1..] {
            let dist = (m - raw).abs();
            if dist < best_dist {
                best = m;
                best_dist = dist;
            }
        }
        best
    }

    /// First marker strictly above `value`, if any.
    pub fn next_above(&self, value: f64) -> Option<f64> {
        self.0.iter().copied().find(|&m| m > value)
    }

    /// Last marker strictly below `value`, if any.
    pub fn next_below(&self, value: f64) -> Option<f64> {
        self.0.iter().rev().copied().find(|&m| m < value)
    }
}
