use chrono::{DateTime, Utc};
use std::fmt;

use super::config::SESSION_COOKIE_PATH;

/// Opaque, high-entropy identifier carried in the session cookie.
///
/// Tokens are produced by [`generate_session_token`](super::generate_session_token)
/// or read back from a cookie store. They are never mutated; a new session gets a new token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Attributes passed along with a cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub expires: DateTime<Utc>,
}

impl CookieOptions {
    pub fn new(path: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            expires,
        }
    }
}

/// Attributes passed along with a cookie deletion. The path must match the one used when setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOptions {
    pub path: String,
}

impl DeleteOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for DeleteOptions {
    fn default() -> Self {
        Self::new(SESSION_COOKIE_PATH)
    }
}
