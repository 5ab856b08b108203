//! Preset decks — named collections of slider configs, loadable from TOML.
//!
//! A preset file holds one or more `[[preset]]` tables, each with its
//! `[[preset.slider]]` entries. Everything is validated while loading so a
//! broken file is reported before any UI exists, with the preset and slider
//! names in the message.
//!
//! ```toml
//! [[preset]]
//! name = "Business marketplace"
//!
//! [[preset.slider]]
//! label = "Annual revenue"
//! min = 50000
//! max = 50000000
//! scale = "log"
//! markers = [50000, 100000, 250000, 500000, 1000000]
//! initial = [250000, 5000000]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::Bounds;
use crate::scale::Scale;
use crate::selection::Selection;
use crate::slider::{ConfigError, SliderConfig};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("cannot read preset file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid preset file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("preset file defines no presets")]
    NoPresets,

    #[error("preset '{preset}' has no sliders")]
    EmptyPreset { preset: String },

    #[error("slider '{label}' in preset '{preset}' is invalid: {source}")]
    InvalidSlider {
        preset: String,
        label: String,
        source: ConfigError,
    },
}

/// A validated deck: every config in `sliders` passed [`SliderConfig::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub sliders: Vec<SliderConfig>,
}

// ── File shapes ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default, rename = "preset")]
    presets: Vec<PresetDef>,
}

#[derive(Debug, Deserialize)]
struct PresetDef {
    name: String,
    #[serde(default, rename = "slider")]
    sliders: Vec<SliderDef>,
}

/// Raw slider entry as written in TOML, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderDef {
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_scale")]
    pub scale: Scale,
    #[serde(default)]
    pub markers: Option<Vec<f64>>,
    #[serde(default = "default_symbol")]
    pub currency_symbol: String,
    pub initial: [f64; 2],
    #[serde(default)]
    pub disabled: bool,
}

fn default_scale() -> Scale {
    Scale::Linear
}

fn default_symbol() -> String {
    "€".to_string()
}

impl SliderDef {
    pub fn build(&self) -> Result<SliderConfig, ConfigError> {
        let config = SliderConfig::new(
            &self.label,
            Bounds::new(self.min, self.max),
            self.scale,
            self.markers.clone(),
            Selection::new(self.initial[0], self.initial[1]),
        )?;
        Ok(config
            .with_currency_symbol(&self.currency_symbol)
            .with_disabled(self.disabled))
    }
}

// ── Loading ─────────────────────────────────────────────────────────────────

/// Parse and validate preset TOML text.
pub fn parse_presets(text: &str) -> Result<Vec<Preset>, PresetError> {
    let file: PresetFile = toml::from_str(text)?;
    if file.presets.is_empty() {
        return Err(PresetError::NoPresets);
    }
    let mut presets = Vec::with_capacity(file.presets.len());
    for def in file.presets {
        if def.sliders.is_empty() {
            return Err(PresetError::EmptyPreset { preset: def.name });
        }
        let mut sliders = Vec::with_capacity(def.sliders.len());
        for slider in &def.sliders {
            let config = slider.build().map_err(|source| PresetError::InvalidSlider {
                preset: def.name.clone(),
                label: slider.label.clone(),
                source,
            })?;
            sliders.push(config);
        }
        presets.push(Preset {
            name: def.name,
            sliders,
        });
    }
    Ok(presets)
}

/// Load presets from a TOML file on disk.
pub fn load_presets(path: &Path) -> Result<Vec<Preset>, PresetError> {
    let text = fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_presets(&text)
}

// ── Builtins ────────────────────────────────────────────────────────────────

/// Decks shipped with the binary, used when no preset file is given.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Business marketplace".to_string(),
            sliders: vec![
                builtin(
                    "Annual revenue",
                    Bounds::new(50_000.0, 50_000_000.0),
                    Scale::Log,
                    Some(vec![
                        50_000.0,
                        100_000.0,
                        250_000.0,
                        500_000.0,
                        1_000_000.0,
                        2_500_000.0,
                        5_000_000.0,
                        10_000_000.0,
                        25_000_000.0,
                        50_000_000.0,
                    ]),
                    Selection::new(250_000.0, 5_000_000.0),
                ),
                builtin(
                    "EBITDA",
                    Bounds::new(10_000.0, 10_000_000.0),
                    Scale::Log,
                    Some(vec![
                        10_000.0,
                        25_000.0,
                        50_000.0,
                        100_000.0,
                        250_000.0,
                        500_000.0,
                        1_000_000.0,
                        2_500_000.0,
                        5_000_000.0,
                        10_000_000.0,
                    ]),
                    Selection::new(50_000.0, 1_000_000.0),
                ),
                builtin(
                    "Asking price",
                    Bounds::new(0.0, 5_000_000.0),
                    Scale::Linear,
                    None,
                    Selection::new(500_000.0, 2_500_000.0),
                ),
            ],
        },
        Preset {
            name: "Commercial property".to_string(),
            sliders: vec![
                builtin(
                    "Purchase price",
                    Bounds::new(100_000.0, 25_000_000.0),
                    Scale::Log,
                    Some(vec![
                        100_000.0,
                        250_000.0,
                        500_000.0,
                        1_000_000.0,
                        2_500_000.0,
                        5_000_000.0,
                        10_000_000.0,
                        25_000_000.0,
                    ]),
                    Selection::new(500_000.0, 5_000_000.0),
                ),
                builtin(
                    "Gross annual rent",
                    Bounds::new(0.0, 2_000_000.0),
                    Scale::Linear,
                    None,
                    Selection::new(50_000.0, 500_000.0),
                ),
            ],
        },
    ]
}

fn builtin(
    label: &str,
    bounds: Bounds,
    scale: Scale,
    markers: Option<Vec<f64>>,
    initial: Selection,
) -> SliderConfig {
    SliderConfig::new(label, bounds, scale, markers, initial)
        .expect("builtin slider config is valid")
}
