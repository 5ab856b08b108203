//! RangeBand Core — dual-thumb range selection without any terminal code.
//!
//! This crate contains everything about a slider except its pixels:
//! - Bounds and the linear/logarithmic value↔percent mapping
//! - Marker lists with nearest-value snapping
//! - The selection ordering gate (a thumb never crosses its sibling)
//! - Slider configuration, validation and interaction state
//! - Compact currency formatting for readouts
//! - Preset decks, built in or loaded from TOML

pub mod bounds;
pub mod format;
pub mod markers;
pub mod preset;
pub mod scale;
pub mod selection;
pub mod slider;

pub use bounds::Bounds;
pub use format::compact_currency;
pub use markers::Markers;
pub use preset::{builtin_presets, load_presets, parse_presets, Preset, PresetError, SliderDef};
pub use scale::Scale;
pub use selection::{apply_update, Selection, Thumb, UpdateOutcome};
pub use slider::{ConfigError, SliderConfig, SliderState};

#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}
