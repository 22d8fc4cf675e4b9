//! TUI bootstrap, teardown, and client handoff.

use super::events::run_app;
use crate::config::ProfileStore;
use crate::process::{self, ClientError};
use crate::tui::{AppState, ConnectRequest};
use crate::{log_debug, log_error};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub(crate) type SelectorTerminal = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Default)]
pub(crate) struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    // Terminal mode lifecycle.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Self { active: true })
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }

        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        self.active = false;
    }

    /// Give the terminal back to the shell for a child process.
    fn suspend(&mut self, terminal: &mut SelectorTerminal) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }

    /// Take the terminal back after the child exits and force a full redraw.
    fn resume(&mut self, terminal: &mut SelectorTerminal) -> io::Result<()> {
        enable_raw_mode()?;
        self.active = true;
        execute!(terminal.backend_mut(), EnterAlternateScreen)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(())
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Suspend the selector, run the requested client in the foreground, then resume.
pub(super) fn hand_off_terminal(
    terminal: &mut SelectorTerminal,
    mode_guard: &mut TerminalModeGuard,
    app: &AppState,
    request: ConnectRequest,
) -> io::Result<Result<(), ClientError>> {
    let profile = &app.store.profiles()[request.profile_index];
    log_debug!("Handing terminal to {} for {}", request.client, profile.display_name());

    mode_guard.suspend(terminal)?;
    let result = process::run_client(request.client, profile);
    mode_guard.resume(terminal)?;

    Ok(result)
}

/// Run the interactive selector until the user quits.
pub fn run_selector(store: ProfileStore) -> io::Result<()> {
    log_debug!("Starting interactive selector with {} profile(s)", store.len());

    let mut mode_guard = TerminalModeGuard::enter()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(store);
    let result = run_app(&mut terminal, &mut mode_guard, &mut app);
    let show_cursor_result = terminal.show_cursor();

    mode_guard.cleanup();

    if let Err(err) = result {
        log_error!("Selector error: {}", err);
        return Err(err);
    }

    if let Err(err) = show_cursor_result {
        log_error!("Failed to restore cursor visibility: {}", err);
        return Err(err);
    }

    log_debug!("Selector exited");
    Ok(())
}
