//! Use case implementations.

mod login_use_case;
mod resolve_token_use_case;
mod signup_use_case;
mod submit_quiz_use_case;

pub use login_use_case::LoginUseCase;
pub use resolve_token_use_case::{ResolveTokenUseCase, ResolvedToken};
pub use signup_use_case::SignupUseCase;
pub use submit_quiz_use_case::SubmitQuizUseCase;
