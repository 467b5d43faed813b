//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{
    BookingFlow, CalendarMonth, DateRange, FilterCriteria, SessionToken, Workspace,
    WorkspaceCategory,
};
pub use errors::{AuthError, StorageError};
pub use ports::{CatalogPort, KeyValueStore};
