//! Signup screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::widgets::TextInput;

const FIELD_COUNT: usize = 3;

/// Action requested by a key press on the signup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAction {
    /// Nothing to do.
    None,
    /// Submit the entered fields.
    Submit,
    /// Switch back to the login screen.
    SwitchToLogin,
    /// Quit the application.
    Quit,
}

/// Signup form UI.
pub struct SignupScreen {
    name: TextInput,
    email: TextInput,
    password: TextInput,
    focus: usize,
    busy: bool,
}

impl SignupScreen {
    /// Creates new signup screen with the name field focused.
    #[must_use]
    pub fn new() -> Self {
        let mut name = TextInput::new("Full Name").placeholder("Your full name");
        name.set_focused(true);
        let email = TextInput::new("Email Address").placeholder("your@email.com");
        let password = TextInput::new("Password")
            .password()
            .placeholder("Min 6 characters");

        Self {
            name,
            email,
            password,
            focus: 0,
            busy: false,
        }
    }

    /// Returns entered name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Returns entered email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.value()
    }

    /// Returns entered password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.value()
    }

    /// Returns whether a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks a request as in flight, disabling submission.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            (self.focus + 1) % FIELD_COUNT
        } else {
            (self.focus + FIELD_COUNT - 1) % FIELD_COUNT
        };
        self.name.set_focused(self.focus == 0);
        self.email.set_focused(self.focus == 1);
        self.password.set_focused(self.focus == 2);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.password,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> SignupAction {
        if self.busy {
            return SignupAction::None;
        }

        match key.code {
            KeyCode::Esc => return SignupAction::Quit,
            KeyCode::Enter => return SignupAction::Submit,
            KeyCode::F(2) => return SignupAction::SwitchToLogin,
            KeyCode::Tab => {
                self.cycle_focus(true);
                return SignupAction::None;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return SignupAction::None;
            }
            _ => {}
        }

        self.focused_input().handle_key(key);
        SignupAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(17),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Create Account ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<7>(inner);

        let subtitle = Paragraph::new("Start your eligibility journey")
            .style(Style::default().fg(Color::White));
        subtitle.render(areas[0], buf);

        (&self.name).render(areas[2], buf);
        (&self.email).render(areas[3], buf);
        (&self.password).render(areas[4], buf);

        let status = if self.busy {
            Line::from(Span::styled(
                "Creating account...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(vec![
                Span::styled("Enter: Sign up", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("F2: Login", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
            ])
        };
        Paragraph::new(status).render(areas[6], buf);
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &SignupScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut SignupScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_three_field_cycle() {
        let mut screen = SignupScreen::new();
        type_str(&mut screen, "Asha");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "a@b.c");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "123456");

        assert_eq!(screen.name(), "Asha");
        assert_eq!(screen.email(), "a@b.c");
        assert_eq!(screen.password(), "123456");
    }

    #[test]
    fn test_backtab_cycles_backward() {
        let mut screen = SignupScreen::new();
        screen.handle_key(key(KeyCode::BackTab));
        type_str(&mut screen, "secret");

        assert_eq!(screen.password(), "secret");
    }

    #[test]
    fn test_busy_blocks_resubmission() {
        let mut screen = SignupScreen::new();
        screen.set_busy(true);

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), SignupAction::None);
    }

    #[test]
    fn test_switch_to_login() {
        let mut screen = SignupScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::F(2))),
            SignupAction::SwitchToLogin
        );
    }
}
