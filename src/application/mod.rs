//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful and pure services behind the booking tab.
pub mod services;
/// Session object and store keys.
pub mod session;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, SignupRequest};
pub use services::{BookingSearch, WorkspaceFilter};
pub use session::{Session, SessionSource, SessionStatus};
pub use use_cases::{CheckSessionUseCase, LoginUseCase, LogoutUseCase, SignupUseCase};
