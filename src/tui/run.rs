//! Viewer effects boundary: terminal lifecycle, key mapping, event loop.
//!
//! This is the only viewer module with side effects. It wires the pure
//! layers (state, update, view) to the real terminal via crossterm and
//! ratatui. Everything runs on the calling thread: block on the next
//! terminal event, apply at most one action, redraw.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::cursor::{MoveTo, Show};
use crossterm::{ExecutableCommand, QueueableCommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::types::Portfolio;

use super::state::{Action, App, Transition};
use super::tabs::TabController;
use super::update::update;
use super::view::render;
use super::viewport::ViewportMetrics;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Raw mode swallows SIGINT, so Ctrl+C arrives here as a key.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Action::PreviousTab),
        KeyCode::Right => Some(Action::NextTab),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTheme),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Owns the terminal while the viewer runs.
///
/// Dropping it leaves the alternate screen and raw mode, so every exit
/// path out of [`run`] (quit, `?` on an I/O error, unwinding) restores
/// the user's shell.
struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let setup = io::stdout()
            .execute(EnterAlternateScreen)
            .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
        match setup {
            Ok(terminal) => Ok(TerminalGuard { terminal }),
            Err(e) => {
                let _ = restore_terminal(&mut io::stdout());
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort: nothing useful to do if the terminal is gone.
        if let Err(e) = restore_terminal(self.terminal.backend_mut()) {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

/// Restore the terminal to normal mode: cooked input, main screen,
/// visible cursor.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    out.queue(LeaveAlternateScreen)?.queue(Show)?;
    out.flush()
}

/// Install (once per process) a panic hook that restores the terminal
/// before printing the panic.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal(&mut io::stdout());
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the full-screen viewer until the user quits.
pub fn run(portfolio: &Portfolio, tabs: TabController) -> io::Result<()> {
    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::with_tabs(portfolio, tabs);
    tracing::info!(tabs = app.nav.tabs.len(), "viewer started");

    loop {
        guard.terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = map_key(key) else {
                    continue;
                };
                let size = guard.terminal.size()?;
                let metrics = ViewportMetrics::new(size.width, size.height);

                match update(&mut app, &action, &metrics) {
                    Transition::TabSwitched(_) => {
                        guard.terminal.backend_mut().execute(MoveTo(0, 0))?;
                    }
                    Transition::Redraw => {}
                    Transition::Quit => break,
                }
            }
            // Next draw reads the new size.
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    tracing::info!("viewer closed");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
