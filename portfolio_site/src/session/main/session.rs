use chrono::{DateTime, TimeDelta, Utc};
use http::HeaderMap;

use super::cookie::{delete_session_cookie, get_session_token, set_session_cookie};
use super::token::generate_session_token;
use crate::session::config::SESSION_COOKIE_MAX_AGE;
use crate::session::errors::SessionError;
use crate::session::store::{CookieStore, HeaderCookieStore};
use crate::session::types::SessionToken;

/// Start a new session: generate a token and store it in the session cookie
/// for [`SESSION_COOKIE_MAX_AGE`] seconds.
#[tracing::instrument(skip_all)]
pub fn start_session<S: CookieStore + ?Sized>(store: &mut S) -> Result<SessionToken, SessionError> {
    if get_session_token(store).is_some() {
        tracing::debug!("Replacing existing session cookie");
    }

    let token = generate_session_token()?;
    let expires_at = session_expiry(Utc::now(), *SESSION_COOKIE_MAX_AGE)?;
    set_session_cookie(store, &token, expires_at)?;

    tracing::debug!("Session started, expires at {expires_at}");
    Ok(token)
}

/// Expiry of a session starting at `now` that lasts `max_age` seconds.
fn session_expiry(now: DateTime<Utc>, max_age: u64) -> Result<DateTime<Utc>, SessionError> {
    i64::try_from(max_age)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            SessionError::Config(format!("SESSION_COOKIE_MAX_AGE {max_age} is out of range"))
        })
}

/// End the current session by removing the session cookie.
#[tracing::instrument(skip_all)]
pub fn end_session<S: CookieStore + ?Sized>(store: &mut S) -> Result<(), SessionError> {
    if get_session_token(store).is_none() {
        tracing::debug!("No session cookie present, deleting anyway");
    }
    delete_session_cookie(store)
}

/// Start a session for a request and return the response headers carrying the new cookie
///
/// # Arguments
/// * `request_headers` - The HTTP headers from the request
///
/// # Returns
/// * `Result<(HeaderMap, SessionToken), SessionError>` - The `Set-Cookie` headers and the new token
pub fn prepare_session_response(
    request_headers: &HeaderMap,
) -> Result<(HeaderMap, SessionToken), SessionError> {
    let mut store = HeaderCookieStore::from_request_headers(request_headers);
    let token = start_session(&mut store)?;
    Ok((store.into_response_headers(), token))
}

/// Prepare a logout response by removing the session cookie
///
/// # Arguments
/// * `request_headers` - The HTTP headers from the request
///
/// # Returns
/// * `Result<HeaderMap, SessionError>` - The headers with the deleting `Set-Cookie`, or an error
pub fn prepare_logout_response(request_headers: &HeaderMap) -> Result<HeaderMap, SessionError> {
    let mut store = HeaderCookieStore::from_request_headers(request_headers);
    end_session(&mut store)?;
    Ok(store.into_response_headers())
}
