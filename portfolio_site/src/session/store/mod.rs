mod header;
mod memory;

pub use header::HeaderCookieStore;
pub use memory::{InMemoryCookieStore, StoredCookie};

use crate::session::errors::SessionError;
use crate::session::types::{CookieOptions, DeleteOptions};

/// Cookie storage supplied by the host request/response cycle.
///
/// Implementations own cookie serialization. The session layer only decides
/// names, values and attributes.
pub trait CookieStore {
    /// Set or replace the cookie `name`.
    fn set(&mut self, name: &str, value: &str, options: CookieOptions) -> Result<(), SessionError>;

    /// Current value of the cookie `name`, if any.
    fn get(&self, name: &str) -> Option<&str>;

    /// Remove the cookie `name`. Removing an absent cookie is not an error.
    fn delete(&mut self, name: &str, options: DeleteOptions) -> Result<(), SessionError>;
}
