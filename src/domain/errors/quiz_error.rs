//! Quiz submission error types.

use thiserror::Error;

/// Quiz submission error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum QuizError {
    #[error("please answer this question")]
    Unanswered { id: &'static str },

    #[error("age must be a whole number between 1 and 120")]
    InvalidAge { value: String },

    #[error("no session token available, please log in first")]
    NotAuthenticated,

    #[error("{message}")]
    Rejected { message: String },

    #[error("network error during submission: {message}")]
    NetworkError { message: String },

    #[error("unexpected submission error: {message}")]
    Unexpected { message: String },
}

impl QuizError {
    /// Creates invalid age error.
    #[must_use]
    pub fn invalid_age(value: impl Into<String>) -> Self {
        Self::InvalidAge {
            value: value.into(),
        }
    }

    /// Creates rejection error carrying the server-provided message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the flow should stay in place for a retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unexpected { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }
}
