//! Domain error types.

mod auth_error;
mod quiz_error;

pub use auth_error::AuthError;
pub use quiz_error::QuizError;
