//! Port definitions.

mod auth_port;
mod quiz_port;
mod token_storage_port;

pub use auth_port::{AuthPort, AuthSession};
pub use quiz_port::{QuizPort, QuizSubmission};
pub use token_storage_port::TokenStoragePort;

/// Hand-written port mocks shared across test modules.
#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::quiz_port::mock::{CapturedSubmission, MockQuizPort};
    pub use super::token_storage_port::mock::MockTokenStorage;
}
