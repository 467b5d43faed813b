//! Application configuration.

/// Configuration file model.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config and data file locations.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, SessionStoreKind, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
