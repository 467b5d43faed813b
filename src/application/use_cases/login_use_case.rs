//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::LoginRequest;
use crate::application::session::{Session, SessionSource, TOKEN_KEY};
use crate::domain::entities::SessionToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::KeyValueStore;

/// Opens a session from the login form.
///
/// Credentials are not checked. A placeholder token is persisted so the next
/// launch skips the login screen.
#[derive(Clone)]
pub struct LoginUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the token cannot be persisted.
    pub async fn execute(&self, request: LoginRequest) -> Result<Session, AuthError> {
        debug!(email = %request.email, "Attempting login");

        let token = SessionToken::placeholder();
        self.store
            .save(TOKEN_KEY, token.as_str())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to persist session token");
                AuthError::from(e)
            })?;

        info!(email = %request.email, "Login successful");
        Ok(Session::opened(token, SessionSource::Login, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{FailingStore, MemoryStore};

    #[tokio::test]
    async fn test_login_persists_placeholder_token() {
        let store = Arc::new(MemoryStore::new());
        let use_case = LoginUseCase::new(store.clone());

        let session = use_case
            .execute(LoginRequest::new("jane@example.com", "secret"))
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.source(), SessionSource::Login);
        assert_eq!(
            store.get(TOKEN_KEY).await.unwrap().as_deref(),
            Some(SessionToken::PLACEHOLDER)
        );
    }

    #[tokio::test]
    async fn test_empty_form_still_logs_in() {
        let store = Arc::new(MemoryStore::new());
        let use_case = LoginUseCase::new(store.clone());

        let result = use_case.execute(LoginRequest::default()).await;

        assert!(result.is_ok());
        assert!(store.contains(TOKEN_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let use_case = LoginUseCase::new(Arc::new(FailingStore));

        let result = use_case.execute(LoginRequest::default()).await;

        assert!(matches!(result, Err(AuthError::Storage(_))));
    }
}
