//! Presentation layer with screens, widgets, and input handling.

/// Key bindings and per-screen command hints.
pub mod commands;
/// Event handling.
pub mod events;
/// Route stack and main-area tabs.
pub mod navigation;
/// Accent-derived styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
