//! Quiz submission port definition.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{AGE_RANGE, AnswerSet, EligibilityReport, SessionToken};
use crate::domain::errors::QuizError;

/// Wire payload for the scoring endpoint.
///
/// Field names match the question ids; `age` is coerced to an integer even
/// though it is collected as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSubmission {
    /// Age in years.
    pub age: i64,
    /// Gender answer.
    pub gender: String,
    /// State answer.
    pub state: String,
    /// Urban/Rural answer.
    pub area: String,
    /// Income band answer.
    pub income: String,
    /// Occupation answer.
    pub occupation: String,
    /// Education level answer.
    pub education: String,
    /// Category answer.
    pub category: String,
    /// Agricultural land answer.
    pub has_land: String,
    /// Disability answer.
    pub is_disabled: String,
}

impl QuizSubmission {
    /// Builds the payload from a completed answer set.
    ///
    /// # Errors
    /// Returns [`QuizError::Unanswered`] for the first empty answer and
    /// [`QuizError::InvalidAge`] when the age text is not a whole number in
    /// the accepted range.
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, QuizError> {
        if let Some(id) = answers.first_unanswered() {
            return Err(QuizError::Unanswered { id });
        }

        let age_text = answers.get("age").trim();
        let age: i64 = age_text
            .parse()
            .map_err(|_| QuizError::invalid_age(age_text))?;
        if !AGE_RANGE.contains(&age) {
            return Err(QuizError::invalid_age(age_text));
        }

        Ok(Self {
            age,
            gender: answers.get("gender").to_string(),
            state: answers.get("state").to_string(),
            area: answers.get("area").to_string(),
            income: answers.get("income").to_string(),
            occupation: answers.get("occupation").to_string(),
            education: answers.get("education").to_string(),
            category: answers.get("category").to_string(),
            has_land: answers.get("has_land").to_string(),
            is_disabled: answers.get("is_disabled").to_string(),
        })
    }
}

/// Port for the quiz scoring operation.
#[async_trait]
pub trait QuizPort: Send + Sync {
    /// Submits answers with the bearer token, returning the server's report.
    async fn submit(
        &self,
        token: &SessionToken,
        submission: &QuizSubmission,
    ) -> Result<EligibilityReport, QuizError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Captured submission call for assertions.
    #[derive(Debug, Clone)]
    pub struct CapturedSubmission {
        /// Token the call was made with.
        pub token: String,
        /// Payload the call carried.
        pub submission: QuizSubmission,
    }

    /// Mock quiz port recording calls and replaying a canned response.
    pub struct MockQuizPort {
        response: Result<serde_json::Value, String>,
        calls: Arc<Mutex<Vec<CapturedSubmission>>>,
    }

    impl MockQuizPort {
        /// Creates mock that succeeds with the given payload.
        pub fn succeeding(payload: serde_json::Value) -> Self {
            Self {
                response: Ok(payload),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Creates mock that rejects every submission.
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                response: Err(message.into()),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Returns every call made so far.
        pub async fn calls(&self) -> Vec<CapturedSubmission> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl QuizPort for MockQuizPort {
        async fn submit(
            &self,
            token: &SessionToken,
            submission: &QuizSubmission,
        ) -> Result<EligibilityReport, QuizError> {
            self.calls.lock().await.push(CapturedSubmission {
                token: token.as_str().to_string(),
                submission: submission.clone(),
            });

            match &self.response {
                Ok(payload) => Ok(EligibilityReport::new(payload.clone())),
                Err(message) => Err(QuizError::rejected(message.clone())),
            }
        }
    }
}
