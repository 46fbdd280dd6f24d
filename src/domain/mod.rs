//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Questionnaire flow state machine.
pub mod flow;
/// Transient notification entity.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{AnswerSet, SessionToken, User};
pub use errors::{AuthError, QuizError};
pub use flow::{QuizFlow, Transition};
pub use notification::{Notification, NotificationLevel};
pub use ports::{AuthPort, QuizPort, TokenStoragePort};
