//! Application state — single-owner, main-thread only.
//!
//! Every mutation of a slider's selection goes through `SliderState` in
//! rangeband-core; this module only holds the deck, the preset list, the
//! change log, and cross-cutting UI state.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rangeband_core::{builtin_presets, Preset, Selection, SliderState};

use crate::ui::widgets::range_slider::RangeSliderState;

/// Oldest change rows are dropped past this.
pub const CHANGE_HISTORY_CAP: usize = 200;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Sliders,
    Presets,
    Changes,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Sliders => 0,
            Panel::Presets => 1,
            Panel::Changes => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Sliders),
            1 => Some(Panel::Presets),
            2 => Some(Panel::Changes),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Sliders => "Sliders",
            Panel::Presets => "Presets",
            Panel::Changes => "Changes",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A row in the change log.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub timestamp: NaiveDateTime,
    pub label: String,
    pub range: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ValueEntry,
}

/// Sliders panel state — the deck itself plus the row cursor.
#[derive(Debug)]
pub struct SlidersPanelState {
    pub sliders: Vec<RangeSliderState>,
    pub cursor: usize,
}

impl SlidersPanelState {
    pub fn from_preset(preset: &Preset) -> Self {
        let sliders = preset
            .sliders
            .iter()
            .cloned()
            .map(|config| RangeSliderState::new(SliderState::new(config)))
            .collect();
        Self { sliders, cursor: 0 }
    }

    pub fn active(&self) -> Option<&RangeSliderState> {
        self.sliders.get(self.cursor)
    }

    pub fn active_mut(&mut self) -> Option<&mut RangeSliderState> {
        self.sliders.get_mut(self.cursor)
    }
}

/// Presets panel state.
#[derive(Debug)]
pub struct PresetsPanelState {
    pub presets: Vec<Preset>,
    pub cursor: usize,
    /// Index of the preset the current deck was built from.
    pub applied: usize,
}

/// Changes panel state — the log of accepted selection updates.
#[derive(Debug, Default)]
pub struct ChangesPanelState {
    pub records: VecDeque<ChangeRecord>,
    pub scroll: usize,
}

impl ChangesPanelState {
    /// Append a change row, newest first. Consecutive duplicates from one
    /// drag collapse into a single row. Returns whether a row was added.
    pub fn push(&mut self, label: &str, range: String) -> bool {
        if let Some(front) = self.records.front() {
            if front.label == label && front.range == range {
                return false;
            }
        }
        self.records.push_front(ChangeRecord {
            timestamp: chrono::Local::now().naive_local(),
            label: label.to_string(),
            range,
        });
        if self.records.len() > CHANGE_HISTORY_CAP {
            self.records.pop_back();
        }
        true
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Panel states
    pub sliders: SlidersPanelState,
    pub presets: PresetsPanelState,
    pub changes: ChangesPanelState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
    pub entry_input: String,
    pub mouse_enabled: bool,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    /// Build the app from a preset list. An empty list falls back to the
    /// built-in presets so the app always starts with a working deck.
    pub fn new(presets: Vec<Preset>, state_path: PathBuf) -> Self {
        let presets = if presets.is_empty() {
            builtin_presets()
        } else {
            presets
        };
        let sliders = SlidersPanelState::from_preset(&presets[0]);
        Self {
            active_panel: Panel::Sliders,
            running: true,
            sliders,
            presets: PresetsPanelState {
                presets,
                cursor: 0,
                applied: 0,
            },
            changes: ChangesPanelState::default(),
            status_message: None,
            overlay: Overlay::None,
            entry_input: String::new(),
            mouse_enabled: true,
            state_path,
        }
    }

    /// Rebuild the deck from the given preset, resetting every selection
    /// to the preset's initial range.
    pub fn apply_preset(&mut self, idx: usize) {
        let Some(preset) = self.presets.presets.get(idx) else {
            return;
        };
        let name = preset.name.clone();
        self.sliders = SlidersPanelState::from_preset(preset);
        self.presets.applied = idx;
        self.set_status(format!("Applied preset: {name}"));
    }

    /// Log an accepted selection update for the given slider.
    pub fn record_change(&mut self, slider_idx: usize, selection: Selection) {
        let Some(s) = self.sliders.sliders.get(slider_idx) else {
            return;
        };
        let label = s.slider.config.label.clone();
        let range = format!(
            "{} – {}",
            s.slider.config.format_value(selection.low),
            s.slider.config.format_value(selection.high)
        );
        self.changes.push(&label, range);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
