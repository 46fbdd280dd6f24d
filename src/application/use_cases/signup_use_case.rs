//! Signup use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{AuthOutcome, SignupRequest, TokenSource};
use crate::domain::entities::SignupCredentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, TokenStoragePort};

/// Handles the account creation workflow.
#[derive(Clone)]
pub struct SignupUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl SignupUseCase {
    /// Creates new signup use case.
    #[must_use]
    pub const fn new(
        auth_port: Arc<dyn AuthPort>,
        storage_port: Arc<dyn TokenStoragePort>,
    ) -> Self {
        Self {
            auth_port,
            storage_port,
        }
    }

    /// Executes signup with the entered form fields.
    ///
    /// # Errors
    /// Returns error if validation fails or the portal rejects the request
    /// (for example a duplicate email).
    pub async fn execute(&self, request: SignupRequest) -> Result<AuthOutcome, AuthError> {
        let credentials = SignupCredentials::new(request.name, request.email, request.password)?;

        debug!(email = %credentials.email, "Attempting signup");

        let session = self.auth_port.signup(&credentials).await.map_err(|e| {
            warn!(error = %e, "Signup rejected");
            e
        })?;

        info!(
            user_id = %session.user.id(),
            name = %session.user.name(),
            "Account created"
        );

        let token_persisted = if request.persist_token {
            match self.storage_port.store_token(&session.token).await {
                Ok(()) => {
                    info!("Token persisted to secure storage");
                    true
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist token to secure storage");
                    false
                }
            }
        } else {
            debug!("Token persistence disabled, skipping storage");
            false
        };

        Ok(AuthOutcome::new(
            session,
            TokenSource::Credentials,
            token_persisted,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, MockTokenStorage};

    fn make_request() -> SignupRequest {
        SignupRequest::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "hunter2".to_string(),
        )
    }

    #[tokio::test]
    async fn test_successful_signup() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = SignupUseCase::new(auth_port, storage_port.clone());
        let result = use_case.execute(make_request()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().token_persisted);
        assert!(storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_short_password_rejected_before_network() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = SignupUseCase::new(auth_port, storage_port.clone());
        let mut request = make_request();
        request.password = "12345".to_string();

        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(AuthError::PasswordTooShort { .. })));
        assert!(!storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_surfaces_rejection() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = SignupUseCase::new(auth_port, storage_port.clone());
        let result = use_case.execute(make_request()).await;

        assert!(matches!(result, Err(AuthError::Rejected { .. })));
        assert!(!storage_port.has_token().await.unwrap());
    }
}
