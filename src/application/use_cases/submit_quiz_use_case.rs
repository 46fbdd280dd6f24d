//! Quiz submission use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{AnswerSet, EligibilityReport, SessionToken};
use crate::domain::errors::QuizError;
use crate::domain::ports::{QuizPort, QuizSubmission, TokenStoragePort};

/// Handles the final quiz submission.
#[derive(Clone)]
pub struct SubmitQuizUseCase {
    quiz_port: Arc<dyn QuizPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl SubmitQuizUseCase {
    /// Creates new submission use case.
    #[must_use]
    pub const fn new(
        quiz_port: Arc<dyn QuizPort>,
        storage_port: Arc<dyn TokenStoragePort>,
    ) -> Self {
        Self {
            quiz_port,
            storage_port,
        }
    }

    /// Builds the wire payload and submits it with the bearer token.
    ///
    /// The session token held by the UI takes priority; otherwise the stored
    /// token is read so a returning user who skipped login can still submit.
    ///
    /// # Errors
    /// Returns error when answers are incomplete, the age text is not a valid
    /// number, no token is available, or the portal rejects the call.
    pub async fn execute(
        &self,
        token: Option<SessionToken>,
        answers: &AnswerSet,
    ) -> Result<EligibilityReport, QuizError> {
        let submission = QuizSubmission::from_answers(answers)?;

        let token = match token {
            Some(token) => token,
            None => self.stored_token().await?,
        };

        debug!(age = submission.age, "Submitting quiz answers");

        let report = self
            .quiz_port
            .submit(&token, &submission)
            .await
            .map_err(|e| {
                warn!(error = %e, "Quiz submission failed");
                e
            })?;

        info!(
            eligible = report.eligible_schemes().len(),
            fallback = report.fallback_schemes().len(),
            structured = report.is_structured(),
            "Received eligibility report"
        );

        Ok(report)
    }

    async fn stored_token(&self) -> Result<SessionToken, QuizError> {
        match self.storage_port.get_token().await {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(QuizError::NotAuthenticated),
            Err(e) => {
                debug!(error = %e, "Failed to read stored token");
                Err(QuizError::NotAuthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::catalog;
    use crate::domain::ports::mocks::{MockQuizPort, MockTokenStorage};
    use serde_json::json;

    fn scenario_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.set("age", "34");
        answers.set("gender", "Male");
        answers.set("state", "Karnataka");
        answers.set("area", "Urban");
        answers.set("income", "Below ₹1,00,000");
        answers.set("occupation", "Student");
        answers.set("education", "Undergraduate");
        answers.set("category", "General");
        answers.set("has_land", "No");
        answers.set("is_disabled", "No");
        answers
    }

    #[tokio::test]
    async fn test_submits_once_with_bearer_token_and_integer_age() {
        let quiz_port = Arc::new(MockQuizPort::succeeding(json!({
            "eligible_schemes": [],
            "fallback_schemes": []
        })));
        let storage = Arc::new(MockTokenStorage::with_token(SessionToken::new_unchecked(
            "stored.session.token",
        )));

        let use_case = SubmitQuizUseCase::new(quiz_port.clone(), storage);
        let result = use_case.execute(None, &scenario_answers()).await;

        assert!(result.is_ok());

        let calls = quiz_port.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].token, "stored.session.token");
        assert_eq!(calls[0].submission.age, 34);
        assert_eq!(calls[0].submission.state, "Karnataka");
        assert_eq!(calls[0].submission.income, "Below ₹1,00,000");
    }

    #[tokio::test]
    async fn test_held_token_preferred_over_storage() {
        let quiz_port = Arc::new(MockQuizPort::succeeding(json!({})));
        let storage = Arc::new(MockTokenStorage::with_token(SessionToken::new_unchecked(
            "stored.session.token",
        )));

        let use_case = SubmitQuizUseCase::new(quiz_port.clone(), storage);
        let held = SessionToken::new_unchecked("held.session.token");
        use_case
            .execute(Some(held), &scenario_answers())
            .await
            .unwrap();

        assert_eq!(quiz_port.calls().await[0].token, "held.session.token");
    }

    #[tokio::test]
    async fn test_report_payload_forwarded_verbatim() {
        let payload = json!({"surprise": {"shape": [1, 2, 3]}});
        let quiz_port = Arc::new(MockQuizPort::succeeding(payload.clone()));
        let storage = Arc::new(MockTokenStorage::with_token(SessionToken::new_unchecked(
            "stored.session.token",
        )));

        let use_case = SubmitQuizUseCase::new(quiz_port, storage);
        let report = use_case.execute(None, &scenario_answers()).await.unwrap();

        assert_eq!(report.raw(), &payload);
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let quiz_port = Arc::new(MockQuizPort::succeeding(json!({})));
        let storage = Arc::new(MockTokenStorage::new());

        let use_case = SubmitQuizUseCase::new(quiz_port.clone(), storage);
        let result = use_case.execute(None, &scenario_answers()).await;

        assert!(matches!(result, Err(QuizError::NotAuthenticated)));
        assert!(quiz_port.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_answers_fail_before_network() {
        let quiz_port = Arc::new(MockQuizPort::succeeding(json!({})));
        let storage = Arc::new(MockTokenStorage::with_token(SessionToken::new_unchecked(
            "stored.session.token",
        )));

        let use_case = SubmitQuizUseCase::new(quiz_port.clone(), storage);
        let mut answers = scenario_answers();
        answers.set(catalog()[5].id, "");

        let result = use_case.execute(None, &answers).await;

        assert!(matches!(result, Err(QuizError::Unanswered { .. })));
        assert!(quiz_port.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_detail() {
        let quiz_port = Arc::new(MockQuizPort::failing("Invalid token"));
        let storage = Arc::new(MockTokenStorage::with_token(SessionToken::new_unchecked(
            "stored.session.token",
        )));

        let use_case = SubmitQuizUseCase::new(quiz_port, storage);
        let result = use_case.execute(None, &scenario_answers()).await;

        assert!(matches!(result, Err(QuizError::Rejected { message }) if message == "Invalid token"));
    }
}
