//! Theme tokens for the RangeBand TUI.
//!
//! Styles are exposed as free functions so panel code can write
//! `theme::accent()` inline in `Span::styled` calls.
//!
//! # Color Palette
//! - **Accent**: warm amber (focus, thumbs, highlights)
//! - **Band**: soft green (the selected range between the thumbs)
//! - **Negative**: hot pink (errors)
//! - **Warning**: neon orange (alerts, rejected input)
//! - **Neutral**: cool purple (marker ticks, secondary info)
//! - **Muted**: steel blue (track base, labels, disabled sliders)

use ratatui::style::{Color, Modifier, Style};

/// Warm amber accent (focus, thumbs, highlights).
pub const ACCENT: Color = Color::Rgb(255, 179, 71);
/// Soft green for the selected band.
pub const BAND: Color = Color::Rgb(0, 255, 128);

const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn band() -> Style {
    Style::default().fg(BAND)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Muted and dimmed, for sliders that accept no interaction.
pub fn disabled() -> Style {
    muted().add_modifier(Modifier::DIM)
}

/// Border style for the main panel frame.
pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

/// Title style for the main panel frame.
pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
