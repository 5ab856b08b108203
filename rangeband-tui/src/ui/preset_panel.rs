//! Panel 2 — Presets: named slider decks, one applied at a time.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]select [Enter]apply",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    for (i, preset) in app.presets.presets.iter().enumerate() {
        let style = if i == app.presets.cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let marker = if i == app.presets.applied { "●" } else { " " };
        let n = preset.sliders.len();

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), theme::band()),
            Span::styled(preset.name.clone(), style),
            Span::styled(
                format!("  {n} slider{}", if n == 1 { "" } else { "s" }),
                theme::muted(),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Applying a preset resets every selection to its initial range.",
        theme::neutral(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
