use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Spam detected")]
    SpamDetected,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Captcha verification failed")]
    CaptchaFailed,

    #[error("Internal server error. Please try again later.")]
    Internal(String),
}
