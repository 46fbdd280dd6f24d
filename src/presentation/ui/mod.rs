//! Screens and the application orchestrator.

mod app;
mod login_screen;
mod quiz_screen;
mod results_screen;
mod signup_screen;

pub use app::App;
pub use login_screen::{LoginAction, LoginScreen};
pub use quiz_screen::{QuizKeyResult, QuizScreen};
pub use results_screen::{ResultsAction, ResultsScreen};
pub use signup_screen::{SignupAction, SignupScreen};
