//! Input dispatch — overlays consume first, then global keys, then the
//! active panel's handler. Mouse events drive the slider drag pipeline.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ValueEntry => {
            handle_value_entry(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Sliders; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Presets; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Changes; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Sliders => handle_sliders_key(app, key),
        Panel::Presets => handle_presets_key(app, key),
        Panel::Changes => handle_changes_key(app, key),
        Panel::Help => {} // display only
    }
}

/// Handle a mouse event. Only the Sliders panel is mouse-interactive, and
/// only while no overlay is open.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None || app.active_panel != Panel::Sliders {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = app
                .sliders
                .sliders
                .iter()
                .position(|s| s.hit(mouse.column, mouse.row));
            let Some(idx) = hit else { return };
            app.sliders.cursor = idx;
            let s = &mut app.sliders.sliders[idx];
            if let Some(percent) = s.percent_at_column(mouse.column) {
                s.slider.grab(percent);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let idx = app.sliders.cursor;
            let accepted = {
                let Some(s) = app.sliders.sliders.get_mut(idx) else { return };
                if !s.slider.is_dragging() {
                    return;
                }
                let Some(track) = s.track else { return };
                // Overshooting the track ends pins the thumb to the end.
                let col = mouse
                    .column
                    .clamp(track.x, track.x + track.width.saturating_sub(1));
                match s.percent_at_column(col) {
                    Some(percent) => s.slider.drag_to(percent),
                    None => None,
                }
            };
            if let Some(selection) = accepted {
                app.record_change(idx, selection);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(s) = app.sliders.active_mut() {
                s.slider.release();
            }
        }
        _ => {}
    }
}

fn handle_sliders_key(app: &mut AppState, key: KeyEvent) {
    let count = app.sliders.sliders.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.sliders.cursor + 1 < count {
                app.sliders.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sliders.cursor = app.sliders.cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            if let Some(s) = app.sliders.active_mut() {
                s.slider.toggle_thumb();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => step_active(app, -1),
        KeyCode::Char('l') | KeyCode::Right => step_active(app, 1),
        KeyCode::Char('g') => {
            let openable = app
                .sliders
                .active()
                .is_some_and(|s| !s.slider.config.disabled);
            if openable {
                app.entry_input.clear();
                app.overlay = Overlay::ValueEntry;
            }
        }
        KeyCode::Esc => {
            // Cancel an in-progress mouse drag.
            if let Some(s) = app.sliders.active_mut() {
                s.slider.release();
            }
        }
        _ => {}
    }
}

/// Step the selected slider's active thumb and log an accepted update.
fn step_active(app: &mut AppState, direction: i32) {
    let idx = app.sliders.cursor;
    let accepted = app
        .sliders
        .sliders
        .get_mut(idx)
        .and_then(|s| s.slider.nudge(direction));
    if let Some(selection) = accepted {
        app.record_change(idx, selection);
    }
}

fn handle_presets_key(app: &mut AppState, key: KeyEvent) {
    let count = app.presets.presets.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.presets.cursor + 1 < count {
                app.presets.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.presets.cursor = app.presets.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.apply_preset(app.presets.cursor);
        }
        _ => {}
    }
}

fn handle_changes_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.changes.scroll + 1 < app.changes.records.len() {
                app.changes.scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.changes.scroll = app.changes.scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_value_entry(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.entry_input.clear();
        }
        KeyCode::Enter => {
            let input = app.entry_input.trim().to_string();
            app.overlay = Overlay::None;
            app.entry_input.clear();

            let Some(raw) = parse_amount(&input) else {
                if !input.is_empty() {
                    app.set_warning(format!("Not a number: {input}"));
                }
                return;
            };
            let idx = app.sliders.cursor;
            let accepted = app
                .sliders
                .sliders
                .get_mut(idx)
                .and_then(|s| s.slider.set_active_value(raw));
            // A candidate that would cross the other thumb is dropped
            // silently; only accepted updates are recorded.
            if let Some(selection) = accepted {
                app.record_change(idx, selection);
            }
        }
        KeyCode::Backspace => {
            app.entry_input.pop();
        }
        KeyCode::Char(c) => {
            app.entry_input.push(c);
        }
        _ => {}
    }
}

/// Parse a typed amount. Accepts plain numbers plus `k`/`K` and `m`/`M`
/// suffixes; currency symbols, commas, and spaces are ignored.
fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '€' | '$' | '£' | ',' | ' '))
        .collect();
    let (digits, factor) = if let Some(d) = cleaned.strip_suffix(['k', 'K']) {
        (d, 1_000.0)
    } else if let Some(d) = cleaned.strip_suffix(['m', 'M']) {
        (d, 1_000_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };
    digits
        .parse::<f64>()
        .ok()
        .map(|v| v * factor)
        .filter(|v| v.is_finite())
}
