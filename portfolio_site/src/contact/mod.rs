mod captcha;
mod config;
mod errors;
mod main;
mod types;

pub use captcha::CaptchaVerifier;
pub use config::CAPTCHA_SECRET;
pub use errors::ContactError;
pub use main::{is_valid_email, submit_contact_form, validate_contact_form};
pub use types::{ContactForm, ContactReceipt};
