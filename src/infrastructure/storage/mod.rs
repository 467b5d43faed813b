//! Session store adapters.

mod file_store;
#[cfg(feature = "keyring")]
mod keyring_store;

use std::sync::Arc;

use tracing::info;

pub use file_store::FileStore;
#[cfg(feature = "keyring")]
pub use keyring_store::KeyringStore;

use crate::domain::ports::KeyValueStore;
use crate::infrastructure::config::{SessionStoreKind, StorageManager};

/// Builds the configured session store.
///
/// Without the `keyring` feature a keyring request falls back to the file store.
#[must_use]
pub fn build_session_store(
    kind: SessionStoreKind,
    storage: &StorageManager,
) -> Arc<dyn KeyValueStore> {
    match kind {
        #[cfg(feature = "keyring")]
        SessionStoreKind::Keyring => {
            info!("Using system keyring session store");
            Arc::new(KeyringStore::new())
        }
        #[cfg(not(feature = "keyring"))]
        SessionStoreKind::Keyring => {
            tracing::warn!("Keyring support not compiled in, falling back to file session store");
            Arc::new(FileStore::new(storage.session_file()))
        }
        SessionStoreKind::File => {
            let path = storage.session_file();
            info!(path = %path.display(), "Using file session store");
            Arc::new(FileStore::new(path))
        }
    }
}
