//! Panel 1 — Sliders: the slider deck, one dual-thumb row per slider.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::range_slider::RangeSlider;

/// Header + track + one blank spacer row.
const ROWS_PER_SLIDER: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    if area.height == 0 {
        return;
    }

    let hint = Line::from(Span::styled(
        "[j/k]select [h/l]step [Space]thumb [g]type a value",
        theme::muted(),
    ));
    f.render_widget(
        Paragraph::new(hint),
        Rect::new(area.x, area.y, area.width, 1),
    );

    if area.height <= 2 {
        return;
    }
    let body = Rect::new(area.x, area.y + 2, area.width, area.height - 2);

    let visible = ((body.height / ROWS_PER_SLIDER).max(1)) as usize;
    let count = app.sliders.sliders.len();
    let cursor = app.sliders.cursor;
    let start = if cursor >= visible { cursor + 1 - visible } else { 0 };
    let end = count.min(start + visible);

    // Off-screen sliders must not keep a stale track rectangle, or mouse
    // presses on their old rows would still reach them.
    for (i, s) in app.sliders.sliders.iter_mut().enumerate() {
        if i < start || i >= end {
            s.track = None;
        }
    }

    for (row, idx) in (start..end).enumerate() {
        let y = body.y + (row as u16) * ROWS_PER_SLIDER;
        let slot = Rect::new(body.x, y, body.width, 2).intersection(body);
        let widget = RangeSlider::new().focused(idx == cursor);
        f.render_stateful_widget(widget, slot, &mut app.sliders.sliders[idx]);
    }
}
