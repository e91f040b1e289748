mod config;
mod errors;
mod main;
mod store;
mod types;

pub use config::{
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_PATH, SESSION_COOKIE_SECURE,
    SESSION_TOKEN_BYTES,
};
pub use errors::SessionError;
pub use main::{
    delete_session_cookie, end_session, generate_session_token, get_session_token,
    prepare_logout_response, prepare_session_response, set_session_cookie, start_session,
};
pub use store::{CookieStore, HeaderCookieStore, InMemoryCookieStore, StoredCookie};
pub use types::{CookieOptions, DeleteOptions, SessionToken};
