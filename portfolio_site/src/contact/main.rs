use chrono::Utc;

use super::captcha::CaptchaVerifier;
use super::config::CAPTCHA_SECRET;
use super::errors::ContactError;
use super::types::{ContactForm, ContactReceipt};

/// Check the shape of `email`: `local@domain.tld`, no whitespace, a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a submission without contacting the CAPTCHA service.
///
/// Checks run in order: honeypot, required fields, email format.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), ContactError> {
    if form.honeypot.as_deref().is_some_and(|h| !h.is_empty()) {
        tracing::info!("Contact form honeypot filled, rejecting submission");
        return Err(ContactError::SpamDetected);
    }

    let required = [
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
        ("captcha", &form.captcha),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ContactError::MissingField(*field));
    }

    if !is_valid_email(&form.email) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(())
}

/// Validate a contact form submission, verify its CAPTCHA token and record it
///
/// # Arguments
/// * `form` - The submitted form
/// * `verifier` - Service used to check the CAPTCHA token against [`CAPTCHA_SECRET`]
///
/// # Returns
/// * `Result<ContactReceipt, ContactError>` - The receipt to send back, or the first failed check
#[tracing::instrument(skip_all, fields(subject = %form.subject))]
pub async fn submit_contact_form(
    form: &ContactForm,
    verifier: &dyn CaptchaVerifier,
) -> Result<ContactReceipt, ContactError> {
    validate_contact_form(form)?;

    if !verifier.verify(CAPTCHA_SECRET.as_str(), &form.captcha).await {
        tracing::warn!("Captcha verification failed");
        return Err(ContactError::CaptchaFailed);
    }

    tracing::info!(
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        message = %form.message,
        timestamp = %Utc::now().to_rfc3339(),
        "Contact form submission"
    );

    Ok(ContactReceipt::sent())
}
