//! Infrastructure layer with external service adapters.

/// Portal API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::PortalClient;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel};
pub use storage::KeyringTokenStorage;
