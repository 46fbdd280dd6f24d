//! Application configuration.

mod app_config;
mod args;

pub use app_config::{AppConfig, ConfigError, LogLevel, UiConfig};
pub use args::CliArgs;
