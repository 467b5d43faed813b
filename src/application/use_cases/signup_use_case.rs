//! Signup use case implementation.

use tracing::info;

use crate::application::dto::SignupRequest;
use crate::application::session::{Session, SessionSource};
use crate::domain::entities::SessionToken;

/// Opens a session from the signup form.
///
/// The session lives for this process only; nothing is written to the store,
/// so the next launch starts at the login screen.
#[derive(Clone, Copy, Default)]
pub struct SignupUseCase;

impl SignupUseCase {
    /// Creates new signup use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes signup with provided request.
    #[must_use]
    pub fn execute(&self, request: &SignupRequest) -> Session {
        info!(name = %request.name, email = %request.email, "Account created");
        Session::opened(SessionToken::placeholder(), SessionSource::Signup, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_session_not_persisted() {
        let session = SignupUseCase::new().execute(&SignupRequest::default());

        assert!(session.is_authenticated());
        assert!(!session.is_persisted());
        assert_eq!(session.source(), SessionSource::Signup);
    }
}
