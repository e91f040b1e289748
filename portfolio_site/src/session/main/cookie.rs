use chrono::{DateTime, Utc};

use crate::session::config::{SESSION_COOKIE_NAME, SESSION_COOKIE_PATH};
use crate::session::errors::SessionError;
use crate::session::store::CookieStore;
use crate::session::types::{CookieOptions, DeleteOptions, SessionToken};

/// Write the session cookie carrying `token` into `store`.
///
/// `expires_at` is not validated. Passing a timestamp in the past makes the
/// client drop the cookie, which some flows use on purpose.
pub fn set_session_cookie<S: CookieStore + ?Sized>(
    store: &mut S,
    token: &SessionToken,
    expires_at: DateTime<Utc>,
) -> Result<(), SessionError> {
    store.set(
        SESSION_COOKIE_NAME,
        token.as_str(),
        CookieOptions::new(SESSION_COOKIE_PATH, expires_at),
    )
}

/// Remove the session cookie from `store`. Deleting an absent cookie is a no-op.
pub fn delete_session_cookie<S: CookieStore + ?Sized>(store: &mut S) -> Result<(), SessionError> {
    store.delete(SESSION_COOKIE_NAME, DeleteOptions::new(SESSION_COOKIE_PATH))
}

/// Session token currently held in `store`, if any.
pub fn get_session_token<S: CookieStore + ?Sized>(store: &S) -> Option<SessionToken> {
    store
        .get(SESSION_COOKIE_NAME)
        .filter(|value| !value.is_empty())
        .map(|value| SessionToken::new(value.to_string()))
}
