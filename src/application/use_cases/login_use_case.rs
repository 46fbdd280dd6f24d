//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{AuthOutcome, LoginRequest, TokenSource};
use crate::domain::entities::LoginCredentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, TokenStoragePort};

/// Handles the login workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl LoginUseCase {
    /// Creates new login use case.
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

    /// Executes login with the entered form fields.
    ///
    /// # Errors
    /// Returns error if validation fails or the portal rejects the credentials.
    /// A storage failure after a successful login downgrades to a warning.
    pub async fn execute(&self, request: LoginRequest) -> Result<AuthOutcome, AuthError> {
        let credentials = LoginCredentials::new(request.email, request.password)?;

        debug!(email = %credentials.email, "Attempting login");

        let session = self.auth_port.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login rejected");
            e
        })?;

        info!(
            user_id = %session.user.id(),
            name = %session.user.name(),
            "Successfully authenticated"
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

    /// Deletes the stored token.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn delete_token(&self) -> Result<(), AuthError> {
        debug!("Deleting token from secure storage");
        match self.storage_port.delete_token().await {
            Ok(()) => {
                info!("Token deleted from secure storage");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete token from secure storage");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, MockTokenStorage};

    fn make_request() -> LoginRequest {
        LoginRequest::new("test@example.com".to_string(), "hunter2".to_string())
    }

    #[tokio::test]
    async fn test_successful_login_persists_token() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let result = use_case.execute(make_request()).await;

        assert!(result.is_ok());
        let outcome = result.unwrap();
        assert_eq!(outcome.user().email(), "test@example.com");
        assert_eq!(outcome.source, TokenSource::Credentials);
        assert!(outcome.token_persisted);

        assert!(storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_storage_empty() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let result = use_case.execute(make_request()).await;

        assert!(matches!(result, Err(AuthError::Rejected { .. })));
        assert!(!storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_the_portal() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let request = LoginRequest::new(String::new(), "hunter2".to_string());
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(AuthError::MissingField { .. })));
        assert!(!storage_port.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_without_persistence() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let storage_port = Arc::new(MockTokenStorage::new());

        let use_case = LoginUseCase::new(auth_port, storage_port.clone());
        let result = use_case.execute(make_request().without_persistence()).await;

        assert!(result.is_ok());
        assert!(!result.unwrap().token_persisted);
        assert!(!storage_port.has_token().await.unwrap());
    }
}
