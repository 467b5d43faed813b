//! Startup session check.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::session::{Session, SessionSource, TOKEN_KEY};
use crate::domain::entities::SessionToken;
use crate::domain::ports::KeyValueStore;

/// Reads the persisted session token once at startup.
pub struct CheckSessionUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl CheckSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Resolves the session. Store errors fail open to an anonymous session.
    pub async fn execute(&self) -> Session {
        debug!("Checking session store for token");
        match self.store.get(TOKEN_KEY).await {
            Ok(Some(value)) => {
                let token = SessionToken::new(value);
                info!(token = %token, "Restored stored session");
                Session::restored(token)
            }
            Ok(None) => {
                debug!("No stored session");
                Session::anonymous(SessionSource::Stored)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read session store, continuing signed out");
                Session::anonymous(SessionSource::Stored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SessionStatus;
    use crate::domain::ports::mocks::{FailingStore, MemoryStore};

    #[tokio::test]
    async fn test_stored_token_authenticates() {
        let store = Arc::new(MemoryStore::with_entry(TOKEN_KEY, "anything"));
        let session = CheckSessionUseCase::new(store).execute().await;

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.source(), SessionSource::Stored);
        assert!(session.is_persisted());
    }

    #[tokio::test]
    async fn test_missing_token_is_anonymous() {
        let store = Arc::new(MemoryStore::new());
        let session = CheckSessionUseCase::new(store).execute().await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_store_failure_fails_open() {
        let session = CheckSessionUseCase::new(Arc::new(FailingStore))
            .execute()
            .await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
    }
}
