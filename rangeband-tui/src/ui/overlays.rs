//! Overlay widgets — welcome and exact-value entry.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to RangeBand ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press 1 for the Sliders panel",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Pick a slider with j/k, Space for thumbs",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Step with h/l or drag with the mouse",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press g to type an exact value",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Exact-value entry overlay for the active thumb.
pub fn render_value_entry(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(50, 35, area);
    f.render_widget(Clear, popup);

    let (label, thumb) = match app.sliders.active() {
        Some(s) => (
            s.slider.config.label.clone(),
            s.slider.active_thumb().label(),
        ),
        None => (String::new(), "low"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Set {thumb} value [Enter]apply [Esc]cancel "))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let text = vec![
        Line::from(Span::styled(
            format!("{label}: {thumb} thumb"),
            theme::muted(),
        )),
        Line::from(Span::styled(
            "Amount (k and M suffixes work, e.g. 250k or 2.5M):",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(app.entry_input.as_str(), theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
    ];

    let para = Paragraph::new(text);
    f.render_widget(para, inner);
}
