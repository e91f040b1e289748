mod components;
mod contact;
mod error;
mod router;
mod session;

pub use components::{Button, ButtonType, RollingTextView};
pub use error::{ContactRejection, IntoResponseError};
pub use router::{site_router, site_router_no_trace};
pub use session::AuthSession;

// Re-export what applications need from the core crate
pub use portfolio_site::{
    CaptchaVerifier, ContactForm, ContactReceipt, DiagnosticSink, ROLLING_TEXT_INTERVAL,
    RollingText, RollingTextError, SESSION_COOKIE_NAME, SITE_API_PREFIX, SessionToken,
    TokioIntervalTimer, TracingSink,
};
