//! Selector color styles.

use ratatui::style::{Color, Modifier, Style};

pub(crate) fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub(crate) fn profile_style() -> Style {
    Style::default().fg(Color::White)
}

pub(crate) fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
