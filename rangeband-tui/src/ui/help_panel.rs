//! Panel 4 — Help: keyboard shortcuts and slider behavior notes.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Sliders");
    key(&mut lines, "j / k", "Select slider below / above");
    key(&mut lines, "Space", "Switch between the low and high thumb");
    key(&mut lines, "h / l", "Step the active thumb down / up");
    key(&mut lines, "g", "Type an exact value for the active thumb");
    key(&mut lines, "Mouse", "Press near a thumb to grab it, drag, release");
    key(&mut lines, "Esc", "Cancel an in-progress mouse drag");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Presets");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter", "Apply the preset to the slider deck");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Changes");
    key(&mut lines, "j / k", "Scroll the change log");
    lines.push(Line::from(""));

    section(&mut lines, "Slider Behavior");
    key(&mut lines, "Markers", "Thumbs snap to the nearest marker; exact midpoints keep the lower one");
    key(&mut lines, "Log tracks", "Equal factors take equal widths (50K→500K as wide as 500K→5M)");
    key(&mut lines, "Crossing", "A thumb can never pass the other; crossing moves are dropped");
    key(&mut lines, "Locked", "Disabled sliders ignore every key and mouse press");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
