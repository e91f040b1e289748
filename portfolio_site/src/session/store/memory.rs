use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::CookieStore;
use crate::session::errors::SessionError;
use crate::session::types::{CookieOptions, DeleteOptions};

/// A cookie held by [`InMemoryCookieStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub expires: DateTime<Utc>,
}

/// Browser-like cookie jar kept in memory.
///
/// Cookies are keyed by name and path, so a deletion only removes a cookie
/// when its path matches the one it was set with. Writing a cookie whose
/// expiry is not in the future removes it, as a browser would.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCookieStore {
    entry: HashMap<(String, String), StoredCookie>,
}

impl InMemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full cookie record for `name`, including its attributes.
    ///
    /// When the name is set under several paths, the most specific (longest)
    /// path wins, the same cookie a browser lists first.
    pub fn cookie(&self, name: &str) -> Option<&StoredCookie> {
        let now = Utc::now();
        self.entry
            .values()
            .filter(|cookie| cookie.name == name && cookie.expires > now)
            .max_by_key(|cookie| cookie.path.len())
    }

    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }
}

impl CookieStore for InMemoryCookieStore {
    fn set(&mut self, name: &str, value: &str, options: CookieOptions) -> Result<(), SessionError> {
        let key = (name.to_string(), options.path.clone());
        if options.expires <= Utc::now() {
            tracing::debug!("Cookie {name} set with past expiry, removing it");
            self.entry.remove(&key);
            return Ok(());
        }

        self.entry.insert(
            key,
            StoredCookie {
                name: name.to_string(),
                value: value.to_string(),
                path: options.path,
                expires: options.expires,
            },
        );
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.cookie(name).map(|cookie| cookie.value.as_str())
    }

    fn delete(&mut self, name: &str, options: DeleteOptions) -> Result<(), SessionError> {
        if self
            .entry
            .remove(&(name.to_string(), options.path.clone()))
            .is_none()
        {
            tracing::debug!("No cookie {name} with path {} to delete", options.path);
        }
        Ok(())
    }
}
