//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("failed to retrieve stored session: {message}")]
    SessionRetrievalFailed { message: String },

    #[error("failed to persist session: {message}")]
    SessionStorageFailed { message: String },

    #[error("session store error: {0}")]
    Storage(#[from] super::StorageError),
}

impl AuthError {
    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::SessionRetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates storage failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::SessionStorageFailed {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the session store backend.
    #[must_use]
    pub const fn is_storage_error(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;

    #[test]
    fn test_storage_error_conversion() {
        let err: AuthError = StorageError::NotAvailable("no keyring".into()).into();

        assert!(err.is_storage_error());
        assert_eq!(
            err.to_string(),
            "session store error: session store not available: no keyring"
        );
    }
}
