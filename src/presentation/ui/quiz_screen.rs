//! Questionnaire screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Widget},
};

use crate::domain::entities::{AnswerSet, Question, QuestionKind};
use crate::domain::flow::{QuizFlow, Transition};
use crate::presentation::widgets::{OptionList, TextInput};

/// Result of a key press on the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKeyResult {
    /// Nothing to report.
    None,
    /// Forward gate failed: current question unanswered.
    Blocked,
    /// Last step passed, submit the answers.
    Submit,
    /// Quit the application.
    Quit,
}

enum AnswerWidget {
    Number(TextInput),
    Options(OptionList),
}

/// Walks the user through the question catalog one step at a time.
pub struct QuizScreen {
    flow: QuizFlow,
    answers: AnswerSet,
    widget: AnswerWidget,
    busy: bool,
}

impl QuizScreen {
    /// Creates the screen positioned at the first question.
    #[must_use]
    pub fn new() -> Self {
        let flow = QuizFlow::new();
        let answers = AnswerSet::new();
        let widget = Self::widget_for(flow.current(), &answers);

        Self {
            flow,
            answers,
            widget,
            busy: false,
        }
    }

    /// Returns the flow position.
    #[must_use]
    pub const fn flow(&self) -> &QuizFlow {
        &self.flow
    }

    /// Returns the collected answers.
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks a submission as in flight; keys are ignored until cleared. The
    /// flow stays at the last step so a failed submission can be retried.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn widget_for(question: &Question, answers: &AnswerSet) -> AnswerWidget {
        match question.kind {
            QuestionKind::Number => {
                let mut input = TextInput::new(question.prompt)
                    .numeric()
                    .max_len(3)
                    .placeholder(question.placeholder.unwrap_or_default());
                input.set_value(answers.get(question.id));
                input.set_focused(true);
                AnswerWidget::Number(input)
            }
            QuestionKind::Radio | QuestionKind::Select => AnswerWidget::Options(
                OptionList::new(question.options).with_selected_value(answers.get(question.id)),
            ),
        }
    }

    fn sync_widget(&mut self) {
        self.widget = Self::widget_for(self.flow.current(), &self.answers);
    }

    /// Handles key event, returns result.
    pub fn handle_key(&mut self, key: KeyEvent) -> QuizKeyResult {
        if self.busy {
            return QuizKeyResult::None;
        }

        match key.code {
            KeyCode::Esc => return QuizKeyResult::Quit,
            KeyCode::Enter => {
                return match self.flow.advance(&self.answers) {
                    Transition::Blocked => QuizKeyResult::Blocked,
                    Transition::Moved(_) => {
                        self.sync_widget();
                        QuizKeyResult::None
                    }
                    Transition::Submit => QuizKeyResult::Submit,
                };
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.flow.retreat() {
                    self.sync_widget();
                }
                return QuizKeyResult::None;
            }
            KeyCode::Left if matches!(self.widget, AnswerWidget::Options(_)) => {
                if self.flow.retreat() {
                    self.sync_widget();
                }
                return QuizKeyResult::None;
            }
            _ => {}
        }

        let question_id = self.flow.current().id;
        match &mut self.widget {
            AnswerWidget::Number(input) => {
                if input.handle_key(key) {
                    // Keep the answer set current so the advance gate sees
                    // what is on screen.
                    self.answers.set(question_id, input.value());
                }
            }
            AnswerWidget::Options(list) => {
                if let Some(value) = list.handle_key(key) {
                    self.answers.set(question_id, value);
                }
            }
        }

        QuizKeyResult::None
    }

    fn render_inner(&mut self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(18),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(60),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Eligibility Quiz ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<6>(inner);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.flow.progress() * 100.0).round() as u16;
        let header = Line::from(vec![
            Span::styled(
                format!(
                    "Question {} of {}",
                    self.flow.index() + 1,
                    self.flow.len()
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            Span::styled(format!("{percent}%"), Style::default().fg(Color::Cyan)),
        ]);
        Paragraph::new(header).render(areas[0], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(self.flow.progress())
            .use_unicode(true)
            .label("")
            .render(areas[1], buf);

        let prompt = Paragraph::new(self.flow.current().prompt)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        prompt.render(areas[3], buf);

        match &mut self.widget {
            AnswerWidget::Number(input) => {
                let input_area = Rect {
                    height: areas[4].height.min(3),
                    ..areas[4]
                };
                (&*input).render(input_area, buf);
            }
            AnswerWidget::Options(list) => list.render(areas[4], buf),
        }

        let status = if self.busy {
            Line::from(Span::styled(
                "Checking eligibility...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let next_label = if self.flow.is_last() {
                "Enter: Submit"
            } else {
                "Enter: Next"
            };
            let mut spans = vec![Span::styled(
                next_label,
                Style::default().fg(Color::DarkGray),
            )];
            if matches!(self.widget, AnswerWidget::Options(_)) {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    "Space: Select",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if self.flow.index() > 0 {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    "Ctrl+B: Back",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "Esc: Quit",
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        };
        Paragraph::new(status).render(areas[5], buf);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &mut QuizScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn select_option(screen: &mut QuizScreen, value: &str) {
        // Walk the highlight down until the wanted option is reached.
        for _ in 0..200 {
            if screen.flow.current().options[highlight_of(screen)] == value {
                break;
            }
            screen.handle_key(key(KeyCode::Down));
        }
        screen.handle_key(key(KeyCode::Char(' ')));
    }

    fn highlight_of(screen: &QuizScreen) -> usize {
        match &screen.widget {
            AnswerWidget::Options(list) => {
                let value = list.highlighted_value();
                screen
                    .flow
                    .current()
                    .options
                    .iter()
                    .position(|o| *o == value)
                    .unwrap()
            }
            AnswerWidget::Number(_) => unreachable!("not an option question"),
        }
    }

    fn answer_scenario(screen: &mut QuizScreen) {
        for c in ['3', '4'] {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        let picks = [
            "Male",
            "Karnataka",
            "Urban",
            "Below ₹1,00,000",
            "Student",
            "Undergraduate",
            "General",
            "No",
            "No",
        ];
        for pick in picks {
            assert_eq!(screen.handle_key(key(KeyCode::Enter)), QuizKeyResult::None);
            select_option(screen, pick);
        }
    }

    #[test]
    fn test_blocked_on_empty_answer() {
        let mut screen = QuizScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            QuizKeyResult::Blocked
        );
        assert_eq!(screen.flow().index(), 0);
    }

    #[test]
    fn test_ten_forward_transitions_end_in_submit() {
        let mut screen = QuizScreen::new();
        answer_scenario(&mut screen);

        assert_eq!(screen.flow().index(), 9);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            QuizKeyResult::Submit
        );

        let answers = screen.answers();
        assert_eq!(answers.get("age"), "34");
        assert_eq!(answers.get("state"), "Karnataka");
        assert_eq!(answers.get("is_disabled"), "No");
    }

    #[test]
    fn test_back_preserves_answers() {
        let mut screen = QuizScreen::new();
        screen.handle_key(key(KeyCode::Char('2')));
        screen.handle_key(key(KeyCode::Char('8')));
        screen.handle_key(key(KeyCode::Enter));
        select_option(&mut screen, "Female");

        screen.handle_key(ctrl('b'));
        assert_eq!(screen.flow().index(), 0);
        assert_eq!(screen.answers().get("age"), "28");
        assert_eq!(screen.answers().get("gender"), "Female");

        // The age input is restored with the stored answer.
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.flow().index(), 1);
    }

    #[test]
    fn test_back_noop_at_first_question() {
        let mut screen = QuizScreen::new();
        screen.handle_key(ctrl('b'));
        assert_eq!(screen.flow().index(), 0);
    }

    #[test]
    fn test_busy_ignores_submit_key() {
        let mut screen = QuizScreen::new();
        answer_scenario(&mut screen);
        screen.set_busy(true);

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), QuizKeyResult::None);
        assert_eq!(screen.flow().index(), 9);
    }

    #[test]
    fn test_left_goes_back_on_option_questions() {
        let mut screen = QuizScreen::new();
        screen.handle_key(key(KeyCode::Char('3')));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.flow().index(), 1);

        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.flow().index(), 0);
    }
}
