//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthOutcome, LoginRequest, SignupRequest, TokenSource};
pub use services::NotificationManager;
pub use use_cases::{LoginUseCase, ResolveTokenUseCase, SignupUseCase, SubmitQuizUseCase};
