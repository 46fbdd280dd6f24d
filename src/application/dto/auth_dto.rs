//! Authentication DTOs.

use crate::domain::entities::User;
use crate::domain::ports::AuthSession;

/// Source of the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from system keyring.
    Keyring,
    /// Token from command line or environment.
    CommandLine,
    /// Token freshly issued for entered credentials.
    Credentials,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
            Self::Credentials => "entered credentials",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login form submission.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Entered email.
    pub email: String,
    /// Entered password.
    pub password: String,
    /// Whether to persist the issued token.
    pub persist_token: bool,
}

impl LoginRequest {
    /// Creates new login request with persistence enabled.
    #[must_use]
    pub const fn new(email: String, password: String) -> Self {
        Self {
            email,
            password,
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub const fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }
}

/// Signup form submission.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    /// Entered full name.
    pub name: String,
    /// Entered email.
    pub email: String,
    /// Entered password.
    pub password: String,
    /// Whether to persist the issued token.
    pub persist_token: bool,
}

impl SignupRequest {
    /// Creates new signup request with persistence enabled.
    #[must_use]
    pub const fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub const fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }
}

/// Result of a successful authentication.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The issued session.
    pub session: AuthSession,
    /// Where the token came from.
    pub source: TokenSource,
    /// Whether the token was written to durable storage.
    pub token_persisted: bool,
}

impl AuthOutcome {
    /// Creates new outcome.
    #[must_use]
    pub const fn new(session: AuthSession, source: TokenSource, token_persisted: bool) -> Self {
        Self {
            session,
            source,
            token_persisted,
        }
    }

    /// Returns the authenticated user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.session.user
    }
}
