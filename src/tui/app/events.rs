//! Event loop and top-level event routing.

use super::run::{SelectorTerminal, TerminalModeGuard, hand_off_terminal};
use crate::tui::AppState;
use crate::{debug_enabled, log_debug};
use crossterm::event::{self, Event};
use std::{io, time::Instant};

/// Apply one terminal event to the selector state.
pub(crate) fn dispatch_event(app: &mut AppState, event: Event) -> io::Result<()> {
    match event {
        Event::Key(key) => app.handle_key(key),
        // The next draw picks up the new size.
        Event::Resize(_, _) => Ok(()),
        _ => Ok(()),
    }
}

pub(crate) fn run_app(terminal: &mut SelectorTerminal, mode_guard: &mut TerminalModeGuard, app: &mut AppState) -> io::Result<()> {
    loop {
        let render_started_at = Instant::now();
        terminal.draw(|frame| app.draw(frame))?;
        if debug_enabled!() {
            log_debug!("Selector frame rendered in {:?}", render_started_at.elapsed());
        }

        dispatch_event(app, event::read()?)?;

        if app.should_exit {
            break;
        }

        if let Some(request) = app.take_connect_request() {
            let result = hand_off_terminal(terminal, mode_guard, app, request)?;
            app.finish_client(result);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../test/tui/app/events.rs"]
mod tests;
