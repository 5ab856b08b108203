//! RangeBand TUI — four-panel terminal interface with vim-style navigation.
//!
//! Panels:
//! 1. Sliders — the dual-thumb slider deck, keyboard and mouse driven
//! 2. Presets — named decks; applying one resets every selection
//! 3. Changes — log of accepted selection updates
//! 4. Help — keyboard shortcuts and slider behavior notes

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rangeband_core::{builtin_presets, load_presets};
use rangeband_tui::app::AppState;
use rangeband_tui::{input, persistence, ui};

#[derive(Parser)]
#[command(
    name = "rangeband",
    about = "RangeBand — dual-thumb range sliders in the terminal"
)]
struct Cli {
    /// Preset definitions (TOML). Built-in presets are used when omitted.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Override the state file location.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Disable mouse capture (keyboard only).
    #[arg(long, default_value_t = false)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load presets before touching the terminal so failures print cleanly.
    let presets = match &cli.presets {
        Some(path) => load_presets(path)
            .with_context(|| format!("loading presets from {}", path.display()))?,
        None => builtin_presets(),
    };

    let state_path = cli.state.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rangeband")
            .join("state.json")
    });

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Build app state and restore the previous session.
    let mut app = AppState::new(presets, state_path.clone());
    app.mouse_enabled = !cli.no_mouse;
    let persisted = persistence::load(&state_path);
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    if app.mouse_enabled {
        let _ = execute!(terminal.backend_mut(), DisableMouseCapture);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
