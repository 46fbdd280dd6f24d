//! Domain entity definitions.

mod answers;
mod credentials;
mod question;
mod scheme;
mod token;
mod user;

pub use answers::AnswerSet;
pub use credentials::{LoginCredentials, MIN_SIGNUP_PASSWORD_LEN, Password, SignupCredentials};
pub use question::{AGE_RANGE, INDIAN_STATES, Question, QuestionKind, catalog};
pub use scheme::{EligibilityReport, Scheme};
pub use token::SessionToken;
pub use user::User;
