//! Session token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque "logged in" marker kept in the session store.
///
/// The value is never validated; presence alone means a session exists.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Token written by the login form until a real backend issues one.
    pub const PLACEHOLDER: &'static str = "worknest-session-token";

    /// Wraps a stored token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the placeholder token.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER)
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 10 {
            return "*".repeat(self.value.len());
        }

        let prefix: String = self.value.chars().take(4).collect();
        let suffix: String = self
            .value
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masking() {
        let token = SessionToken::placeholder();
        assert_eq!(token.masked(), "work...oken");
    }

    #[test]
    fn test_short_token_fully_masked() {
        assert_eq!(SessionToken::new("abc").masked(), "***");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::placeholder();
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains(SessionToken::PLACEHOLDER));
    }
}
