//! Dual-thumb range slider widget.
//!
//! Two rows per slider: a header line (label, current range, active thumb)
//! and the track line:
//!
//! ```text
//! Annual revenue   €250K – €5.0M  [low]
//! €50K ─┼──┼━━▮━━━┼━━━▮──┼──┼─ €50.0M
//! ```
//!
//! Rendering is read-only with respect to the value state machine in
//! `rangeband-core`; the only thing written back into the widget state is
//! the on-screen track rectangle, which mouse handling needs to translate
//! columns into track percents.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

use rangeband_core::{SliderState, Thumb};

use crate::theme;

const TRACK_CH: char = '─';
const TICK_CH: char = '┼';
const BAND_CH: char = '━';
const THUMB_CH: char = '▮';

/// Narrower than this and the track is not drawn at all.
const MIN_TRACK_WIDTH: u16 = 8;

/// Widget state: the value state machine plus the last rendered track
/// rectangle for mouse hit-testing.
#[derive(Debug, Clone)]
pub struct RangeSliderState {
    pub slider: SliderState,
    pub track: Option<Rect>,
}

impl RangeSliderState {
    pub fn new(slider: SliderState) -> Self {
        Self {
            slider,
            track: None,
        }
    }

    /// Translate an absolute screen column into a track percent.
    /// `None` when no track was rendered or the column falls outside it.
    pub fn percent_at_column(&self, column: u16) -> Option<f64> {
        let track = self.track?;
        if track.width < 2 || column < track.x || column >= track.x + track.width {
            return None;
        }
        let offset = f64::from(column - track.x);
        let span = f64::from(track.width - 1);
        Some((offset / span * 100.0).clamp(0.0, 100.0))
    }

    /// Whether a screen position falls on the rendered track row.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.track
            .is_some_and(|t| t.contains(Position::new(column, row)))
    }
}

/// The renderable half: per-frame display flags only.
#[derive(Debug, Default)]
pub struct RangeSlider {
    focused: bool,
}

impl RangeSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for RangeSlider {
    type State = RangeSliderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Drop any stale rectangle first so a resize can never leave mouse
        // handling aimed at the previous frame's geometry.
        state.track = None;
        if area.height < 2 || area.width < MIN_TRACK_WIDTH {
            return;
        }

        let config = &state.slider.config;
        let selection = state.slider.selection();
        let disabled = config.disabled;

        // ── Header line ─────────────────────────────────────────────────────
        let label_style = if disabled {
            theme::disabled()
        } else if self.focused {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        let readout_style = if disabled {
            theme::disabled()
        } else if self.focused {
            theme::accent()
        } else {
            theme::muted()
        };
        let tag = if disabled {
            "[locked]"
        } else {
            match state.slider.active_thumb() {
                Thumb::Low => "[low]",
                Thumb::High => "[high]",
            }
        };

        let mut header = vec![
            Span::styled(config.label.clone(), label_style),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} – {}",
                    config.format_value(selection.low),
                    config.format_value(selection.high)
                ),
                readout_style,
            ),
        ];
        if self.focused || disabled {
            header.push(Span::raw("  "));
            header.push(Span::styled(tag, theme::neutral()));
        }
        Line::from(header).render(Rect::new(area.x, area.y, area.width, 1), buf);

        // ── Track line ──────────────────────────────────────────────────────
        let min_label = config.format_value(config.bounds.min);
        let max_label = config.format_value(config.bounds.max);
        let left_w = min_label.chars().count() as u16;
        let right_w = max_label.chars().count() as u16;
        let track_w = area.width.saturating_sub(left_w + right_w + 2);
        if track_w < MIN_TRACK_WIDTH {
            return;
        }
        let track_x = area.x + left_w + 1;
        let y = area.y + 1;

        let bound_style = if disabled {
            theme::disabled()
        } else {
            theme::muted()
        };
        buf.set_string(area.x, y, &min_label, bound_style);
        buf.set_string(track_x + track_w + 1, y, &max_label, bound_style);

        let col_of = |percent: f64| -> u16 {
            let offset = (percent / 100.0 * f64::from(track_w - 1)).round() as u16;
            track_x + offset.min(track_w - 1)
        };

        for i in 0..track_w {
            buf[(track_x + i, y)].set_char(TRACK_CH).set_style(bound_style);
        }
        if let Some(markers) = &config.markers {
            for &value in markers.values() {
                let style = if disabled {
                    theme::disabled()
                } else {
                    theme::neutral()
                };
                buf[(col_of(config.percent_of(value)), y)]
                    .set_char(TICK_CH)
                    .set_style(style);
            }
        }

        let low_col = col_of(config.percent_of(selection.low));
        let high_col = col_of(config.percent_of(selection.high));
        let band_style = if disabled { theme::disabled() } else { theme::band() };
        for x in (low_col + 1)..high_col {
            buf[(x, y)].set_char(BAND_CH).set_style(band_style);
        }

        let thumb_style = |thumb: Thumb| -> Style {
            if disabled {
                theme::disabled()
            } else if self.focused && state.slider.active_thumb() == thumb {
                theme::accent().add_modifier(Modifier::REVERSED)
            } else if self.focused {
                theme::accent()
            } else {
                theme::neutral()
            }
        };
        buf[(low_col, y)]
            .set_char(THUMB_CH)
            .set_style(thumb_style(Thumb::Low));
        buf[(high_col, y)]
            .set_char(THUMB_CH)
            .set_style(thumb_style(Thumb::High));

        state.track = Some(Rect::new(track_x, y, track_w, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeband_core::{Bounds, Scale, Selection, SliderConfig};

    fn plain_state() -> RangeSliderState {
        let config = SliderConfig::new(
            "Asking price",
            Bounds::new(0.0, 100.0),
            Scale::Linear,
            None,
            Selection::new(0.0, 100.0),
        )
        .expect("valid config");
        RangeSliderState::new(SliderState::new(config))
    }

    fn render(state: &mut RangeSliderState, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 2);
        let mut buf = Buffer::empty(area);
        RangeSlider::new().focused(true).render(area, &mut buf, state);
        buf
    }

    fn char_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    #[test]
    fn thumbs_sit_on_the_track_ends() {
        let mut state = plain_state();
        let buf = render(&mut state, 40);
        let track = state.track.expect("track recorded");
        assert_eq!(char_at(&buf, track.x, track.y), "▮");
        assert_eq!(char_at(&buf, track.x + track.width - 1, track.y), "▮");
    }

    #[test]
    fn band_fills_between_the_thumbs() {
        let mut state = plain_state();
        let buf = render(&mut state, 40);
        let track = state.track.unwrap();
        for x in (track.x + 1)..(track.x + track.width - 1) {
            assert_eq!(char_at(&buf, x, track.y), "━", "column {x}");
        }
    }

    #[test]
    fn markers_draw_ticks_outside_the_band() {
        let config = SliderConfig::new(
            "Revenue",
            Bounds::new(0.0, 100.0),
            Scale::Linear,
            Some(vec![0.0, 50.0, 100.0]),
            Selection::new(0.0, 50.0),
        )
        .expect("valid config");
        let mut state = RangeSliderState::new(SliderState::new(config));
        let buf = render(&mut state, 41);
        let track = state.track.unwrap();
        // Right half of the track: base dashes with a tick at the far end.
        assert_eq!(char_at(&buf, track.x + track.width - 1, track.y), "┼");
        let mid = track.x + (track.width - 1) / 2;
        // Thumb at 50 overrides the marker tick there.
        assert_eq!(char_at(&buf, mid, track.y), "▮");
    }

    #[test]
    fn header_shows_label_and_readout() {
        let mut state = plain_state();
        let buf = render(&mut state, 40);
        let header: String = (0..40).map(|x| char_at(&buf, x, 0)).collect();
        assert!(header.contains("Asking price"));
        assert!(header.contains("€0 – €100"));
        assert!(header.contains("[low]"));
    }

    #[test]
    fn too_narrow_records_no_track() {
        let mut state = plain_state();
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        RangeSlider::new().render(area, &mut buf, &mut state);
        assert!(state.track.is_none());
    }

    #[test]
    fn percent_at_column_spans_the_track() {
        let mut state = plain_state();
        render(&mut state, 40);
        let track = state.track.unwrap();
        assert_eq!(state.percent_at_column(track.x), Some(0.0));
        assert_eq!(state.percent_at_column(track.x + track.width - 1), Some(100.0));
        assert_eq!(state.percent_at_column(track.x - 1), None);
        assert_eq!(state.percent_at_column(track.x + track.width), None);
    }

    #[test]
    fn hit_requires_the_track_row() {
        let mut state = plain_state();
        render(&mut state, 40);
        let track = state.track.unwrap();
        assert!(state.hit(track.x + 2, track.y));
        assert!(!state.hit(track.x + 2, track.y + 1));
        assert!(!state.hit(track.x.saturating_sub(1), track.y));
    }
}
