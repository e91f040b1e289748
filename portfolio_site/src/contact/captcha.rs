use async_trait::async_trait;

/// Checks a CAPTCHA response token with the issuing service.
///
/// Implementations log and swallow their own transport failures, reporting
/// them as a failed verification.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, secret: &str, token: &str) -> bool;
}
