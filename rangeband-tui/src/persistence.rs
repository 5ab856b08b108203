//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rangeband_core::Selection;

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub selections: Vec<SavedSelection>,
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

/// One slider's saved range, keyed by label so preset edits between
/// sessions degrade gracefully.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedSelection {
    pub label: String,
    pub low: f64,
    pub high: f64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selections: Vec::new(),
            active_panel: Panel::Sliders,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    let selections = app
        .sliders
        .sliders
        .iter()
        .map(|s| {
            let selection = s.slider.selection();
            SavedSelection {
                label: s.slider.config.label.clone(),
                low: selection.low,
                high: selection.high,
            }
        })
        .collect();
    PersistedState {
        selections,
        active_panel: app.active_panel,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. Saved ranges that no longer fit a
/// slider's bounds are skipped; the slider keeps its initial selection.
pub fn apply(app: &mut AppState, state: PersistedState) {
    for saved in &state.selections {
        let found = app
            .sliders
            .sliders
            .iter_mut()
            .find(|s| s.slider.config.label == saved.label);
        if let Some(s) = found {
            s.slider.restore(Selection::new(saved.low, saved.high));
        }
    }
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}
