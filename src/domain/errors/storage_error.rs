//! Session store error types.

use thiserror::Error;

/// Key-value store error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access session store: {0}")]
    AccessFailed(String),

    #[error("failed to read key {key}: {message}")]
    RetrievalFailed { key: String, message: String },

    #[error("failed to write key {key}: {message}")]
    StoreFailed { key: String, message: String },

    #[error("failed to remove key {key}: {message}")]
    DeletionFailed { key: String, message: String },

    #[error("session store not available: {0}")]
    NotAvailable(String),
}

impl StorageError {
    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval(key: &str, message: impl Into<String>) -> Self {
        Self::RetrievalFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Creates store failed error.
    #[must_use]
    pub fn store(key: &str, message: impl Into<String>) -> Self {
        Self::StoreFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Creates deletion failed error.
    #[must_use]
    pub fn deletion(key: &str, message: impl Into<String>) -> Self {
        Self::DeletionFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
