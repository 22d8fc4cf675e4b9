//! Profile list rendering.

use crate::tui::AppState;
use crate::tui::ui::theme;
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};

pub(crate) const HEADER_TEXT: &str = "Select database";
pub(crate) const FOOTER_TEXT: &str = "Press q to quit.";
pub(crate) const SELECTED_MARKER: &str = "* ";
pub(crate) const UNSELECTED_MARKER: &str = "  ";

impl AppState {
    /// Lines of the selector view, top to bottom.
    pub(crate) fn selector_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.store.len() + 4);

        if let Some(err) = &self.last_error {
            lines.push(Line::from(vec![
                Span::styled("Error: ", theme::error_style()),
                Span::styled(err.to_string(), theme::error_style()),
            ]));
        }

        lines.push(Line::from(Span::styled(HEADER_TEXT, theme::header_style())));

        for (idx, profile) in self.store.profiles().iter().enumerate() {
            let line = if idx == self.cursor {
                Line::from(vec![Span::raw(SELECTED_MARKER), Span::raw(profile.display_name())]).style(theme::selected_style())
            } else {
                Line::from(vec![Span::raw(UNSELECTED_MARKER), Span::raw(profile.display_name())]).style(theme::profile_style())
            };
            lines.push(line);
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(FOOTER_TEXT, theme::hint_style())));
        lines
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.selector_lines()), frame.area());
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/profile_list/render.rs"]
mod tests;
