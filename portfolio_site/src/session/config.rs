use std::sync::LazyLock;

/// Name of the cookie carrying the session token.
///
/// Server-side session lookup depends on this value byte for byte. Changing it
/// invalidates every session issued under the old name.
pub const SESSION_COOKIE_NAME: &str = "auth-session";

/// Path attribute used for both setting and deleting the session cookie.
pub const SESSION_COOKIE_PATH: &str = "/";

/// Number of random bytes behind a session token (144 bits, 24 base64url characters).
pub const SESSION_TOKEN_BYTES: usize = 18;

/// Session lifetime in seconds
/// Default: 30 days
pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60 * 24 * 30)
});

/// Whether the `Secure` attribute is added to session cookies.
/// Only "false" (case-insensitive) disables it.
pub static SESSION_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_SECURE")
        .map(|val| val.to_lowercase() != "false")
        .unwrap_or(true)
});
