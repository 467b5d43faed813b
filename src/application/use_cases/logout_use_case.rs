//! Logout use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::session::{Session, SessionSource, SESSION_KEYS, TOKEN_KEY};
use crate::domain::errors::AuthError;
use crate::domain::ports::KeyValueStore;

/// Ends the current session.
#[derive(Clone)]
pub struct LogoutUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl LogoutUseCase {
    /// Creates new logout use case.
    #[must_use]
    pub const fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Removes the stored token.
    ///
    /// # Errors
    /// Returns error if the token cannot be removed.
    pub async fn execute(&self) -> Result<Session, AuthError> {
        debug!("Removing session token");
        match self.store.remove(TOKEN_KEY).await {
            Ok(()) => {
                info!("Logged out");
                Ok(Session::anonymous(SessionSource::Logout))
            }
            Err(e) => {
                error!(error = %e, "Failed to remove session token");
                Err(e.into())
            }
        }
    }

    /// Removes every key the application owns.
    ///
    /// # Errors
    /// Returns error if any key cannot be removed.
    pub async fn clear_all(&self) -> Result<(), AuthError> {
        debug!(keys = ?SESSION_KEYS, "Clearing session store");
        self.store.remove_many(&SESSION_KEYS).await?;
        info!("Session store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{FailingStore, MemoryStore};

    #[tokio::test]
    async fn test_logout_removes_token() {
        let store = Arc::new(MemoryStore::with_entry(TOKEN_KEY, "t"));
        let use_case = LogoutUseCase::new(store.clone());

        let session = use_case.execute().await.unwrap();

        assert!(!session.is_authenticated());
        assert!(!store.contains(TOKEN_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_without_token_succeeds() {
        let use_case = LogoutUseCase::new(Arc::new(MemoryStore::new()));
        assert!(use_case.execute().await.is_ok());
    }

    #[tokio::test]
    async fn test_clear_all() {
        let store = Arc::new(MemoryStore::with_entry(TOKEN_KEY, "t"));
        LogoutUseCase::new(store.clone()).clear_all().await.unwrap();

        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_logout_failure_is_reported() {
        let use_case = LogoutUseCase::new(Arc::new(FailingStore));
        assert!(use_case.execute().await.is_err());
    }
}
