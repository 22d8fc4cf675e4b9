//! Profile list keyboard handling.

use crate::tui::{AppState, SelectorMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Discrete selector inputs after key decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorKey {
    Up,
    Down,
    Confirm,
    Quit,
}

impl SelectorKey {
    pub(crate) fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if control => Some(Self::Quit),
            _ if control || key.modifiers.contains(KeyModifiers::ALT) => None,
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            KeyCode::Enter => Some(Self::Confirm),
            _ => None,
        }
    }
}

impl AppState {
    /// Handle keyboard input.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> io::Result<()> {
        if self.mode() != SelectorMode::Browsing {
            return Ok(());
        }

        match SelectorKey::from_key_event(key) {
            Some(SelectorKey::Up) => self.move_up(),
            Some(SelectorKey::Down) => self.move_down(),
            Some(SelectorKey::Confirm) => self.confirm_selection(),
            Some(SelectorKey::Quit) => self.request_exit(),
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/profile_list/input.rs"]
mod tests;
