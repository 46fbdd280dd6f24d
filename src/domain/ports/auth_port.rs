//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{LoginCredentials, SessionToken, SignupCredentials, User};
use crate::domain::errors::AuthError;

/// Token and user returned by a successful authentication call.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: SessionToken,
    /// The authenticated user.
    pub user: User,
}

impl AuthSession {
    /// Creates a session from its parts.
    #[must_use]
    pub const fn new(token: SessionToken, user: User) -> Self {
        Self { token, user }
    }
}

/// Port for portal authentication operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges login credentials for a session.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, AuthError>;

    /// Registers a new account and returns its session.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<AuthSession, AuthError>;

    /// Checks portal availability.
    async fn health_check(&self) -> Result<(), AuthError>;
}
