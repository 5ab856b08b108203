//! Panel 3 — Changes: the log of accepted selection updates, newest first.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Recorded: ", theme::muted()),
        Span::styled(app.changes.records.len().to_string(), theme::accent()),
        Span::styled("  [j/k]scroll", theme::muted()),
    ]));
    lines.push(Line::from(""));

    if app.changes.records.is_empty() {
        lines.push(Line::from(Span::styled(
            "No changes recorded yet. Drag a slider in panel 1.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let start = app
        .changes
        .scroll
        .min(app.changes.records.len().saturating_sub(1));
    let end = (start + visible).min(app.changes.records.len());

    for i in start..end {
        let rec = &app.changes.records[i];
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", rec.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("{:<18}", rec.label), theme::accent()),
            Span::styled(rec.range.clone(), theme::band()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
