//! Session object read once at startup.

use crate::domain::entities::SessionToken;

/// Key under which the session token is persisted.
pub const TOKEN_KEY: &str = "auth_token";

/// Every key the application owns in the session store.
pub const SESSION_KEYS: [&str; 1] = [TOKEN_KEY];

/// Whether the user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// A session token exists.
    Authenticated,
    /// No token, or the store could not be read.
    Anonymous,
}

/// How the current session came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Read from the session store at startup.
    Stored,
    /// Created by the login form.
    Login,
    /// Created by the signup form.
    Signup,
    /// Ended by logout.
    Logout,
}

impl SessionSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Stored => "session store",
            Self::Login => "login form",
            Self::Signup => "signup form",
            Self::Logout => "logout",
        }
    }
}

impl std::fmt::Display for SessionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The user's session for this process.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<SessionToken>,
    source: SessionSource,
    persisted: bool,
}

impl Session {
    /// Session restored from the store.
    #[must_use]
    pub fn restored(token: SessionToken) -> Self {
        Self {
            token: Some(token),
            source: SessionSource::Stored,
            persisted: true,
        }
    }

    /// Session opened by a form.
    #[must_use]
    pub fn opened(token: SessionToken, source: SessionSource, persisted: bool) -> Self {
        Self {
            token: Some(token),
            source,
            persisted,
        }
    }

    /// Session without a token.
    #[must_use]
    pub const fn anonymous(source: SessionSource) -> Self {
        Self {
            token: None,
            source,
            persisted: false,
        }
    }

    /// Returns whether a token is held.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        if self.token.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// Returns true when a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns how the session was opened.
    #[must_use]
    pub const fn source(&self) -> SessionSource {
        self.source
    }

    /// Returns whether the token survives a restart.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Returns the session token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous(SessionSource::Stored)
    }
}
