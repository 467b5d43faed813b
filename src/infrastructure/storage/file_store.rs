//! TOML file session store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;
use crate::infrastructure::config::storage::write_toml_atomic;

/// Session store persisted as a flat TOML table.
///
/// Every write rewrites the whole file atomically. The mutex serializes
/// read-modify-write cycles within the process.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => match toml::from_str(&content) {
                Ok(entries) => Ok(entries),
                Err(e) => {
                    warn!(error = %e, path = %self.path.display(), "Malformed session file, ignoring");
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::AccessFailed(e.to_string())),
        }
    }

    async fn write_entries(
        &self,
        key: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::store(key, e.to_string()))?;
        }
        let path = self.path.clone();
        let entries = entries.clone();
        tokio::task::spawn_blocking(move || write_toml_atomic(&path, &entries))
            .await
            .map_err(|e| StorageError::store(key, e.to_string()))?
            .map_err(|e| StorageError::store(key, e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), key, "Reading session file");
        Ok(self.read_entries().await?.remove(key))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        debug!(path = %self.path.display(), key, "Writing session file");
        self.write_entries(key, &entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        debug!(path = %self.path.display(), key, "Removing key from session file");
        self.write_entries(key, &entries)
            .await
            .map_err(|e| StorageError::deletion(key, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.toml"));

        assert!(store.get("auth_token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_get_remove() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("session.toml"));

        store.save("auth_token", "abc").await.unwrap();
        store.save("other", "x").await.unwrap();
        assert_eq!(store.get("auth_token").await.unwrap().as_deref(), Some("abc"));

        store.remove("auth_token").await.unwrap();
        assert!(store.get("auth_token").await.unwrap().is_none());
        assert_eq!(store.get("other").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_values_survive_new_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");

        FileStore::new(&path).save("auth_token", "abc").await.unwrap();

        let reopened = FileStore::new(&path);
        assert!(reopened.contains("auth_token").await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("auth_token").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_saves_keep_every_key() {
        let dir = tempdir().unwrap();
        let store = std::sync::Arc::new(FileStore::new(dir.path().join("session.toml")));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { store.save(&format!("key{i}"), "v").await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        for i in 0..8 {
            assert!(store.contains(&format!("key{i}")).await.unwrap());
        }
    }

    #[test]
    fn test_remove_many_blocking() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.toml"));

        tokio_test::block_on(async {
            store.save("a", "1").await.unwrap();
            store.save("b", "2").await.unwrap();
            store.remove_many(&["a", "b"]).await.unwrap();
            assert!(!store.contains("a").await.unwrap());
            assert!(!store.contains("b").await.unwrap());
        });
    }
}
