//! Keyring-backed session store.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

const KEYRING_SERVICE: &str = "worknest";

/// System keyring adapter; each key is one keyring entry under the service.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Creates new store with the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    /// Creates store with a custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, StorageError> {
        Entry::new(&self.service, key)
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for KeyringStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        debug!(service = %self.service, key, "Reading keyring entry");

        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => {
                debug!(key, "No keyring entry");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, key, "Failed to read keyring entry");
                Err(StorageError::retrieval(key, e.to_string()))
            }
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!(service = %self.service, key, "Writing keyring entry");

        self.entry(key)?.set_password(value).map_err(|e| {
            warn!(error = %e, key, "Failed to write keyring entry");
            StorageError::store(key, e.to_string())
        })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        debug!(service = %self.service, key, "Deleting keyring entry");

        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, key, "Failed to delete keyring entry");
                Err(StorageError::deletion(key, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_save_get_remove() {
        let store = KeyringStore::with_service("worknest-test");

        store.save("auth_token", "value").await.unwrap();
        assert_eq!(store.get("auth_token").await.unwrap().as_deref(), Some("value"));

        store.remove("auth_token").await.unwrap();
        assert!(store.get("auth_token").await.unwrap().is_none());
    }
}
