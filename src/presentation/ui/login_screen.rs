//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::widgets::TextInput;

/// Action requested by a key press on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    /// Nothing to do.
    None,
    /// Submit the entered credentials.
    Submit,
    /// Switch to the signup screen.
    SwitchToSignup,
    /// Delete the saved token.
    DeleteToken,
    /// Quit the application.
    Quit,
}

/// Login form UI.
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: usize,
    busy: bool,
}

impl LoginScreen {
    /// Creates new login screen with the email field focused.
    #[must_use]
    pub fn new() -> Self {
        let mut email = TextInput::new("Email Address").placeholder("your@email.com");
        email.set_focused(true);
        let password = TextInput::new("Password")
            .password()
            .placeholder("Enter your password");

        Self {
            email,
            password,
            focus: 0,
            busy: false,
        }
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

    fn cycle_focus(&mut self) {
        self.focus = (self.focus + 1) % 2;
        self.email.set_focused(self.focus == 0);
        self.password.set_focused(self.focus == 1);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        if self.focus == 0 {
            &mut self.email
        } else {
            &mut self.password
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.busy {
            return LoginAction::None;
        }

        match key.code {
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Enter => return LoginAction::Submit,
            KeyCode::F(2) => return LoginAction::SwitchToSignup,
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::ALT) => {
                return LoginAction::DeleteToken;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                return LoginAction::None;
            }
            _ => {}
        }

        self.focused_input().handle_key(key);
        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(14),
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
            .title(" Welcome Back ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<7>(inner);

        let subtitle = Paragraph::new("Login to check your eligibility")
            .style(Style::default().fg(Color::White));
        subtitle.render(areas[0], buf);

        (&self.email).render(areas[2], buf);
        (&self.password).render(areas[3], buf);

        let switch_line = Line::from(vec![
            Span::raw("Don't have an account? "),
            Span::styled("F2: Sign up", Style::default().fg(Color::Yellow)),
        ]);
        Paragraph::new(switch_line).render(areas[4], buf);

        let status = if self.busy {
            Line::from(Span::styled(
                "Logging in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(vec![
                Span::styled("Enter: Login", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Alt+D: Clear saved", Style::default().fg(Color::DarkGray)),
            ])
        };
        Paragraph::new(status).render(areas[6], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
