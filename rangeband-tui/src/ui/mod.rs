//! Top-level UI layout — four-panel frame with status bar.

pub mod changes_panel;
pub mod help_panel;
pub mod overlays;
pub mod preset_panel;
pub mod slider_panel;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI. Mutable access is needed because rendering the
/// slider deck records each track rectangle back into widget state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::ValueEntry => overlays::render_value_entry(f, main_area, app),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &mut AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Sliders => slider_panel::render(f, inner, app),
        Panel::Presets => preset_panel::render(f, inner, app),
        Panel::Changes => changes_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
