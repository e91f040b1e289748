use std::sync::LazyLock;

const STUB_CAPTCHA_SECRET: &str = "STUB_KEY";

/// Secret sent along with each CAPTCHA verification
///
/// Read from `HCAPTCHA_SECRET`, falling back to the older `HCAPTCHA_SITE_KEY` name.
/// Default: "STUB_KEY"
pub static CAPTCHA_SECRET: LazyLock<String> = LazyLock::new(|| {
    resolve_secret(
        std::env::var("HCAPTCHA_SECRET").ok(),
        std::env::var("HCAPTCHA_SITE_KEY").ok(),
    )
});

fn resolve_secret(secret: Option<String>, legacy: Option<String>) -> String {
    secret
        .filter(|s| !s.is_empty())
        .or(legacy.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| {
            tracing::warn!("No CAPTCHA secret configured, using {STUB_CAPTCHA_SECRET}");
            STUB_CAPTCHA_SECRET.to_string()
        })
}
