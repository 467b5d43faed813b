use super::app_config::{LogLevel, SessionStoreKind};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments, each overriding the matching config field.
#[derive(Debug, Parser)]
#[command(
    name = "worknest",
    version,
    about = "Browse and book workspaces from the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "WORKNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "WORKNEST_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "WORKNEST_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Splash screen duration in milliseconds.
    #[arg(long, value_name = "MS")]
    pub splash_delay_ms: Option<u64>,

    /// Where the session token is kept.
    #[arg(long, value_enum, env = "WORKNEST_SESSION_STORE")]
    pub session_store: Option<SessionStoreKind>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
