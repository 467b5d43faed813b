//! WorkNest - browse and book workspaces from the terminal.
//!
//! The crate follows a layered layout: domain entities and ports, use cases
//! for the session lifecycle, storage and catalog adapters, and a ratatui
//! front end with a splash gate, login, signup and a tabbed main area.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing config, storage, and catalog adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "WorkNest";
