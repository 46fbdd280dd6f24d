//! Incrementally built answer set.

use std::collections::BTreeMap;

use super::question::catalog;

/// Flat mapping from question id to the entered answer.
///
/// Seeded with every catalog id mapped to the empty string, so the key set is
/// fixed for the life of the flow and always matches the question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    values: BTreeMap<&'static str, String>,
}

impl AnswerSet {
    /// Creates an answer set with every question unanswered.
    #[must_use]
    pub fn new() -> Self {
        let values = catalog().iter().map(|q| (q.id, String::new())).collect();
        Self { values }
    }

    /// Returns the stored answer for a question, empty string when unanswered.
    #[must_use]
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map_or("", String::as_str)
    }

    /// Stores an answer. Ids outside the catalog are ignored.
    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(id) {
            *slot = value.into();
        }
    }

    /// Returns whether the question has a non-empty answer.
    #[must_use]
    pub fn is_answered(&self, id: &str) -> bool {
        !self.get(id).trim().is_empty()
    }

    /// Returns the number of answered questions.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        catalog().iter().filter(|q| self.is_answered(q.id)).count()
    }

    /// Returns the id of the first unanswered question, if any.
    #[must_use]
    pub fn first_unanswered(&self) -> Option<&'static str> {
        catalog()
            .iter()
            .find(|q| !self.is_answered(q.id))
            .map(|q| q.id)
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_catalog() {
        let answers = AnswerSet::new();
        assert_eq!(answers.answered_count(), 0);
        assert_eq!(answers.get("age"), "");
        assert_eq!(answers.first_unanswered(), Some("age"));
    }

    #[test]
    fn test_set_and_get() {
        let mut answers = AnswerSet::new();
        answers.set("gender", "Male");

        assert_eq!(answers.get("gender"), "Male");
        assert!(answers.is_answered("gender"));
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut answers = AnswerSet::new();
        answers.set("favourite_color", "blue");

        assert_eq!(answers.get("favourite_color"), "");
        assert_eq!(answers.answered_count(), 0);
    }

    #[test]
    fn test_whitespace_not_an_answer() {
        let mut answers = AnswerSet::new();
        answers.set("age", "   ");

        assert!(!answers.is_answered("age"));
    }
}
