//! Questionnaire flow state machine.
//!
//! The flow is a step index over the fixed catalog with guarded transitions:
//! advancing requires the current question to be answered, and the final
//! advance requests submission instead of moving.

use crate::domain::entities::{AnswerSet, Question, catalog};

/// Outcome of an advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Current question unanswered, index unchanged.
    Blocked,
    /// Moved forward to the contained index.
    Moved(usize),
    /// Last step passed its gate, submit now.
    Submit,
}

/// Position within the question list with guarded movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFlow {
    questions: &'static [Question],
    index: usize,
}

impl QuizFlow {
    /// Creates a flow positioned at the first question.
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: catalog(),
            index: 0,
        }
    }

    /// Returns the current step index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns whether the flow has no steps. Never true for the fixed catalog.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the current step.
    #[must_use]
    pub fn current(&self) -> &'static Question {
        &self.questions[self.index]
    }

    /// Returns whether the current step is the last one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Completion ratio for the progress gauge, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.questions.len() as f64
    }

    /// Returns whether the forward gate passes for the current step.
    #[must_use]
    pub fn can_advance(&self, answers: &AnswerSet) -> bool {
        answers.is_answered(self.current().id)
    }

    /// Attempts to move forward by one step.
    ///
    /// Blocked when the current question is unanswered; at the last step a
    /// passing gate requests submission instead of moving. Never mutates
    /// answers.
    pub fn advance(&mut self, answers: &AnswerSet) -> Transition {
        if !self.can_advance(answers) {
            return Transition::Blocked;
        }

        if self.is_last() {
            return Transition::Submit;
        }

        self.index += 1;
        Transition::Moved(self.index)
    }

    /// Moves back one step. No-op at the first step.
    ///
    /// Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        true
    }
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}
