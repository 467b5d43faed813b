//! Infrastructure layer with external service adapters.

/// Built-in workspace catalog.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Session store adapters.
pub mod storage;

pub use catalog::StaticCatalog;
pub use config::{AppConfig, CliArgs, LogLevel, SessionStoreKind, StorageManager};
#[cfg(feature = "keyring")]
pub use storage::KeyringStore;
pub use storage::{FileStore, build_session_store};
