//! Central configuration for the portfolio_site crate

use std::sync::LazyLock;

/// Route prefix for the site's API endpoints
///
/// The contact form and session endpoints are mounted under this prefix.
/// Default: "/api"
pub static SITE_API_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("SITE_API_PREFIX").unwrap_or_else(|_| "/api".to_string()));
