//! RangeBand TUI — terminal interface for dual-range slider decks.
//!
//! Provides interactive range selection over rangeband-core with:
//! - A slider deck panel with keyboard stepping and mouse dragging
//! - Preset decks loaded from TOML (built-ins compiled in)
//! - A change log of every accepted selection update
//! - JSON state persistence across restarts

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};
