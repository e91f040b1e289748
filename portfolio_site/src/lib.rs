//! portfolio_site - Core behaviour for a personal portfolio web site
//!
//! This crate provides the framework-independent pieces of the site: the
//! session credential manager (token generation and the session cookie),
//! the rolling text display, and contact form handling.

mod config;
mod contact;
mod rolling_text;
mod session;
mod utils;

pub use config::SITE_API_PREFIX;

pub use contact::{
    CAPTCHA_SECRET, CaptchaVerifier, ContactError, ContactForm, ContactReceipt, is_valid_email,
    submit_contact_form, validate_contact_form,
};

pub use rolling_text::{
    DiagnosticSink, EMPTY_TEXTS_WARNING, ManualTimer, ManualTimerHandle, ROLLING_TEXT_INTERVAL,
    RepeatingTimer, RollingText, RollingTextError, TickCallback, TokioIntervalTimer, TracingSink,
};

pub use session::{
    CookieOptions, CookieStore, DeleteOptions, HeaderCookieStore, InMemoryCookieStore,
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_PATH, SESSION_COOKIE_SECURE,
    SESSION_TOKEN_BYTES, SessionError, SessionToken, StoredCookie, delete_session_cookie,
    end_session, generate_session_token, get_session_token, prepare_logout_response,
    prepare_session_response, set_session_cookie, start_session,
};

pub use utils::{UtilError, gen_random_string};
