//! Application configuration.

use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "worknest";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "worknest";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Backend holding the session token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    /// System keyring.
    #[default]
    Keyring,
    /// TOML file in the data directory.
    File,
}

impl std::fmt::Display for SessionStoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyring => write!(f, "keyring"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// How long the splash screen stays up, in milliseconds.
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,

    /// Where the session token is kept.
    #[serde(default)]
    pub session_store: SessionStoreKind,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Amenities listed on each workspace card.
    #[serde(default = "default_amenity_preview")]
    pub amenity_preview: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            amenity_preview: default_amenity_preview(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "#29a7a4".to_string()
}

fn default_splash_delay_ms() -> u64 {
    1500
}

fn default_amenity_preview() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(splash_delay_ms) = args.splash_delay_ms {
            self.splash_delay_ms = splash_delay_ms;
        }
        if let Some(session_store) = args.session_store {
            self.session_store = session_store;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns the splash delay as a duration.
    #[must_use]
    pub const fn splash_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.splash_delay_ms)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("worknest.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            splash_delay_ms: default_splash_delay_ms(),
            session_store: SessionStoreKind::default(),
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            splash_delay_ms = 500
            session_store = "file"

            [ui]
            enable_animations = false

            [theme]
            accent_color = "#ff8800"

            [keybindings]
            "Ctrl+q" = "Quit"
            "Ctrl+f" = "Search"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.splash_delay_ms, 500);
        assert_eq!(config.session_store, SessionStoreKind::File);
        assert!(!config.ui.enable_animations);
        assert_eq!(config.ui.amenity_preview, 2);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
        assert_eq!(config.keybindings.get("Ctrl+f"), Some(&Action::Search));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.splash_delay(), std::time::Duration::from_millis(1500));
        assert_eq!(config.session_store, SessionStoreKind::Keyring);
        assert!(config.keybindings.is_empty());
        assert!(config.ui.enable_animations);
    }

    #[test]
    fn test_args_override_file_values() {
        use clap::Parser;

        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "worknest",
            "--splash-delay-ms",
            "0",
            "--session-store",
            "file",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.splash_delay_ms, 0);
        assert_eq!(config.session_store, SessionStoreKind::File);
    }
}
