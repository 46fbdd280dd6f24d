//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// CLI flags, merged over the config file.
#[derive(Debug, Default, Parser)]
#[command(
    name = "yojana",
    version,
    about = "A terminal client for the Yojana scheme-eligibility service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL.
    #[arg(long, value_name = "URL", env = "YOJANA_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Pre-supplied session token, skipping the login screen.
    #[arg(long, value_name = "TOKEN", env = "YOJANA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Do not store the issued token in the system keyring.
    #[arg(long)]
    pub no_persist_token: bool,
}
