//! Slider configuration and interactive state.
//!
//! `SliderConfig` is the validated, immutable description of one slider:
//! bounds, scale, optional snap markers, display options and the seed
//! selection. `SliderState` layers the mutable interaction state on top and
//! funnels every mutation through the ordering gate in [`crate::selection`],
//! so a thumb can never cross its sibling no matter which input path
//! (drag, keyboard, direct entry) produced the candidate value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::Bounds;
use crate::format::compact_currency;
use crate::markers::Markers;
use crate::scale::Scale;
use crate::selection::{apply_update, Selection, Thumb, UpdateOutcome};

/// Keyboard step for sliders without markers, in percent of the track.
const PLAIN_NUDGE_PERCENT: f64 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("inverted bounds: min {min} is not below max {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("log scale needs a positive minimum, got {min}")]
    LogRequiresPositiveMin { min: f64 },

    #[error("marker list is empty")]
    EmptyMarkers,

    #[error("markers must be strictly ascending (violated at index {index})")]
    MarkersNotAscending { index: usize },

    #[error("initial selection [{low}, {high}] does not fit bounds [{min}, {max}]")]
    InvalidInitialSelection {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },
}

// ── Configuration ───────────────────────────────────────────────────────────

/// Validated description of a single dual-thumb slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub label: String,
    pub bounds: Bounds,
    pub scale: Scale,
    pub markers: Option<Markers>,
    pub currency_symbol: String,
    pub disabled: bool,
    initial: Selection,
}

impl SliderConfig {
    /// Build and validate a config. `markers`, when given, become the only
    /// values the thumbs can land on.
    pub fn new(
        label: &str,
        bounds: Bounds,
        scale: Scale,
        markers: Option<Vec<f64>>,
        initial: Selection,
    ) -> Result<Self, ConfigError> {
        if !(bounds.min < bounds.max) {
            return Err(ConfigError::InvertedBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        if scale == Scale::Log && bounds.min <= 0.0 {
            return Err(ConfigError::LogRequiresPositiveMin { min: bounds.min });
        }
        let markers = markers.map(Markers::new).transpose()?;
        if !(bounds.min <= initial.low && initial.low < initial.high && initial.high <= bounds.max)
        {
            return Err(ConfigError::InvalidInitialSelection {
                low: initial.low,
                high: initial.high,
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self {
            label: label.to_string(),
            bounds,
            scale,
            markers,
            currency_symbol: "€".to_string(),
            disabled: false,
            initial,
        })
    }

    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn initial(&self) -> Selection {
        self.initial
    }

    /// Track position of `value`, 0..=100 inside the bounds.
    pub fn percent_of(&self, value: f64) -> f64 {
        self.scale.percent_of(self.bounds, value)
    }

    /// Value at track position `percent`.
    pub fn value_at(&self, percent: f64) -> f64 {
        self.scale.value_at(self.bounds, percent)
    }

    /// Turn a raw value into the candidate actually offered to the gate:
    /// nearest marker when markers exist, clamped to bounds otherwise.
    pub fn candidate_for(&self, raw: f64) -> f64 {
        match &self.markers {
            Some(markers) => markers.snap(raw),
            None => self.bounds.clamp(raw),
        }
    }

    /// Compact money rendering of `value` with this slider's symbol.
    pub fn format_value(&self, value: f64) -> String {
        compact_currency(&self.currency_symbol, value)
    }
}

// ── Interaction state ───────────────────────────────────────────────────────

/// One slider's live state. The selection is private so that every change
/// goes through [`apply_update`]; rejected candidates leave it untouched.
#[derive(Debug, Clone)]
pub struct SliderState {
    pub config: SliderConfig,
    selection: Selection,
    active_thumb: Thumb,
    dragging: bool,
}

impl SliderState {
    pub fn new(config: SliderConfig) -> Self {
        let selection = config.initial();
        Self {
            config,
            selection,
            active_thumb: Thumb::Low,
            dragging: false,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn active_thumb(&self) -> Thumb {
        self.active_thumb
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn toggle_thumb(&mut self) {
        if self.config.disabled {
            return;
        }
        self.active_thumb = self.active_thumb.other();
    }

    /// Start a drag at track position `percent`: the nearer thumb becomes
    /// active, the low one on an exact tie.
    pub fn grab(&mut self, percent: f64) {
        if self.config.disabled {
            return;
        }
        let low_dist = (percent - self.config.percent_of(self.selection.low)).abs();
        let high_dist = (percent - self.config.percent_of(self.selection.high)).abs();
        self.active_thumb = if high_dist < low_dist {
            Thumb::High
        } else {
            Thumb::Low
        };
        self.dragging = true;
    }

    /// Move the grabbed thumb to track position `percent`. Returns the new
    /// selection on an accepted update (also when the value did not change),
    /// `None` when the candidate was rejected or no drag is in progress.
    pub fn drag_to(&mut self, percent: f64) -> Option<Selection> {
        if !self.dragging || self.config.disabled {
            return None;
        }
        let candidate = self.config.candidate_for(self.config.value_at(percent));
        self.offer(candidate)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Step the active thumb by keyboard: to the adjacent marker when markers
    /// exist, by two percent of the track otherwise. `direction` is the sign
    /// of the step.
    pub fn nudge(&mut self, direction: i32) -> Option<Selection> {
        if self.config.disabled {
            return None;
        }
        let current = self.thumb_value(self.active_thumb);
        let candidate = match &self.config.markers {
            Some(markers) => {
                if direction > 0 {
                    markers.next_above(current)?
                } else {
                    markers.next_below(current)?
                }
            }
            None => {
                let percent = self.config.percent_of(current)
                    + PLAIN_NUDGE_PERCENT * f64::from(direction.signum());
                self.config.bounds.clamp(self.config.value_at(percent))
            }
        };
        self.offer(candidate)
    }

    /// Direct entry for the active thumb. `raw` is snapped or clamped like
    /// any other input before the gate sees it.
    pub fn set_active_value(&mut self, raw: f64) -> Option<Selection> {
        if self.config.disabled {
            return None;
        }
        let candidate = self.config.candidate_for(raw);
        self.offer(candidate)
    }

    /// Replace the selection wholesale, e.g. from a persisted session.
    /// Returns `false` and keeps the current selection when the stored pair
    /// no longer fits the bounds.
    pub fn restore(&mut self, selection: Selection) -> bool {
        let b = self.config.bounds;
        if b.min <= selection.low && selection.low < selection.high && selection.high <= b.max {
            self.selection = selection;
            true
        } else {
            false
        }
    }

    fn thumb_value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Low => self.selection.low,
            Thumb::High => self.selection.high,
        }
    }

    fn offer(&mut self, candidate: f64) -> Option<Selection> {
        match apply_update(self.selection, self.active_thumb, candidate) {
            UpdateOutcome::Accepted(next) => {
                self.selection = next;
                Some(next)
            }
            UpdateOutcome::Rejected => None,
        }
    }
}
