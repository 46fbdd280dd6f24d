//! Results screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{EligibilityReport, Scheme};

/// Action requested by a key press on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    /// Nothing to do.
    None,
    /// Quit the application.
    Quit,
}

/// Renders the server's eligibility report.
pub struct ResultsScreen {
    report: EligibilityReport,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl ResultsScreen {
    /// Creates the screen for a received report.
    #[must_use]
    pub fn new(report: EligibilityReport) -> Self {
        let lines = build_lines(&report);
        Self {
            report,
            lines,
            scroll: 0,
        }
    }

    /// Returns the report being displayed.
    #[must_use]
    pub const fn report(&self) -> &EligibilityReport {
        &self.report
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ResultsAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => ResultsAction::Quit,
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                ResultsAction::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                ResultsAction::None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                ResultsAction::None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                ResultsAction::None
            }
            _ => ResultsAction::None,
        }
    }

    fn render_inner(&mut self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Your Results ");

        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [body, footer] = layout.areas(inner);

        let max_scroll =
            u16::try_from(self.lines.len()).unwrap_or(u16::MAX).saturating_sub(body.height);
        self.scroll = self.scroll.min(max_scroll);

        Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(body, buf);

        let hints = Line::from(vec![
            Span::styled("Up/Down: Scroll", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("q/Esc: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(footer, buf);
    }
}

fn scheme_lines(scheme: &Scheme, lines: &mut Vec<Line<'static>>) {
    let mut title = vec![Span::styled(
        scheme.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    title.push(Span::styled(
        format!("  [{}]", scheme.category),
        Style::default().fg(Color::Cyan),
    ));
    if let Some(tag) = &scheme.eligibility_match {
        let color = if tag == "Eligible" {
            Color::Green
        } else {
            Color::Yellow
        };
        title.push(Span::styled(
            format!("  {tag}"),
            Style::default().fg(color),
        ));
    }
    lines.push(Line::from(title));

    lines.push(Line::from(Span::styled(
        format!("  {}", scheme.description),
        Style::default().fg(Color::Gray),
    )));

    for benefit in &scheme.benefits {
        lines.push(Line::from(Span::raw(format!("  • {benefit}"))));
    }
    if !scheme.documents.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  Documents: {}", scheme.documents.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !scheme.apply_link.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  Apply: {}", scheme.apply_link),
            Style::default().fg(Color::Blue),
        )));
    }
    lines.push(Line::default());
}

fn build_lines(report: &EligibilityReport) -> Vec<Line<'static>> {
    if !report.is_structured() {
        // Unknown payload shape: show it verbatim instead of failing.
        let pretty = serde_json::to_string_pretty(report.raw())
            .unwrap_or_else(|_| report.raw().to_string());
        return pretty.lines().map(|l| Line::from(l.to_string())).collect();
    }

    let mut lines = Vec::new();
    let eligible = report.eligible_schemes();
    let fallback = report.fallback_schemes();

    lines.push(Line::from(Span::styled(
        format!("Schemes you are eligible for ({})", eligible.len()),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    if eligible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No direct matches found.",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }
    for scheme in &eligible {
        scheme_lines(scheme, &mut lines);
    }

    if !fallback.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Worth a closer look ({})", fallback.len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        for scheme in &fallback {
            scheme_lines(scheme, &mut lines);
        }
    }

    lines
}

impl Widget for &mut ResultsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
