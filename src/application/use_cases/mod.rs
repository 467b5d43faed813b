//! Use case implementations.

mod check_session_use_case;
mod login_use_case;
mod logout_use_case;
mod signup_use_case;

pub use check_session_use_case::CheckSessionUseCase;
pub use login_use_case::LoginUseCase;
pub use logout_use_case::LogoutUseCase;
pub use signup_use_case::SignupUseCase;
