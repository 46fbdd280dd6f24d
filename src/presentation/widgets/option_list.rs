//! Scrollable single-select option list.
//!
//! Backs both the radio questions and the long state dropdown; the rendering
//! is the same, only the list length differs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Mutually exclusive option picker.
#[derive(Debug, Clone)]
pub struct OptionList {
    options: &'static [&'static str],
    highlighted: usize,
    selected: Option<usize>,
    offset: usize,
}

impl OptionList {
    /// Creates a list over the given options with nothing selected.
    #[must_use]
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            highlighted: 0,
            selected: None,
            offset: 0,
        }
    }

    /// Restores a previous selection by value, moving the highlight to it.
    #[must_use]
    pub fn with_selected_value(mut self, value: &str) -> Self {
        if let Some(pos) = self.options.iter().position(|o| *o == value) {
            self.selected = Some(pos);
            self.highlighted = pos;
        }
        self
    }

    /// Returns the currently selected option value.
    #[must_use]
    pub fn selected_value(&self) -> Option<&'static str> {
        self.selected.map(|i| self.options[i])
    }

    /// Returns the highlighted (cursor) option value.
    #[must_use]
    pub fn highlighted_value(&self) -> &'static str {
        self.options[self.highlighted]
    }

    /// Moves the highlight up.
    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Moves the highlight down.
    pub fn move_down(&mut self) {
        if self.highlighted + 1 < self.options.len() {
            self.highlighted += 1;
        }
    }

    /// Selects the highlighted option and returns its value.
    pub fn select_highlighted(&mut self) -> &'static str {
        self.selected = Some(self.highlighted);
        self.options[self.highlighted]
    }

    /// Handles a movement or selection key, returning the newly selected
    /// value when the key selected one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<&'static str> {
        match key.code {
            KeyCode::Up => {
                self.move_up();
                None
            }
            KeyCode::Down => {
                self.move_down();
                None
            }
            KeyCode::Char(' ') => Some(self.select_highlighted()),
            _ => None,
        }
    }

    fn scroll_to_fit(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.highlighted < self.offset {
            self.offset = self.highlighted;
        } else if self.highlighted >= self.offset + visible {
            self.offset = self.highlighted + 1 - visible;
        }
    }
}

impl Widget for &mut OptionList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = area.height as usize;
        self.scroll_to_fit(visible);

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .map(|(i, option)| {
                let marker = if self.selected == Some(i) {
                    "(x) "
                } else {
                    "( ) "
                };

                let style = if i == self.highlighted {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if self.selected == Some(i) {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };

                Line::from(Span::styled(format!("{marker}{option}"), style))
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const OPTIONS: &[&str] = &["Male", "Female", "Other"];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_nothing_selected_initially() {
        let list = OptionList::new(OPTIONS);
        assert!(list.selected_value().is_none());
        assert_eq!(list.highlighted_value(), "Male");
    }

    #[test]
    fn test_space_selects_highlighted() {
        let mut list = OptionList::new(OPTIONS);
        list.handle_key(key(KeyCode::Down));

        let selected = list.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(selected, Some("Female"));
        assert_eq!(list.selected_value(), Some("Female"));
    }

    #[test]
    fn test_highlight_clamped_at_edges() {
        let mut list = OptionList::new(OPTIONS);
        list.move_up();
        assert_eq!(list.highlighted_value(), "Male");

        for _ in 0..10 {
            list.move_down();
        }
        assert_eq!(list.highlighted_value(), "Other");
    }

    #[test]
    fn test_restore_previous_selection() {
        let list = OptionList::new(OPTIONS).with_selected_value("Other");
        assert_eq!(list.selected_value(), Some("Other"));
        assert_eq!(list.highlighted_value(), "Other");
    }

    #[test]
    fn test_restore_unknown_value_ignored() {
        let list = OptionList::new(OPTIONS).with_selected_value("Unknown");
        assert!(list.selected_value().is_none());
    }

    #[test]
    fn test_scroll_follows_highlight() {
        let mut list = OptionList::new(OPTIONS);
        list.move_down();
        list.move_down();
        list.scroll_to_fit(2);

        assert_eq!(list.offset, 1);
    }
}
