use askama::Template;
use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use portfolio_site_axum::{
    AuthSession, Button, ButtonType, CaptchaVerifier, RollingText, RollingTextView,
    SITE_API_PREFIX, TokioIntervalTimer,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) tagline: Arc<RollingText<TokioIntervalTimer>>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    tagline_html: String,
    contact_button_html: String,
    session_button_html: String,
    signed_in: bool,
    api_prefix: &'a str,
    captcha_token: &'a str,
}

/// Token the demo form posts in place of a hosted CAPTCHA response.
const DEMO_CAPTCHA_TOKEN: &str = "demo-token";

pub(crate) async fn index(
    State(state): State<AppState>,
    session: Option<AuthSession>,
) -> Result<Response, (StatusCode, String)> {
    let render_error = |e: askama::Error| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());

    let session_label = if session.is_some() {
        "Sign out"
    } else {
        "Start session"
    };
    let template = IndexTemplate {
        tagline_html: RollingTextView::new(state.tagline.as_ref())
            .render()
            .map_err(render_error)?,
        contact_button_html: Button::new("Send message")
            .button_type(ButtonType::Submit)
            .render()
            .map_err(render_error)?,
        session_button_html: Button::new(session_label)
            .button_type(ButtonType::Submit)
            .render()
            .map_err(render_error)?,
        signed_in: session.is_some(),
        api_prefix: SITE_API_PREFIX.as_str(),
        captcha_token: DEMO_CAPTCHA_TOKEN,
    };

    let html = Html(template.render().map_err(render_error)?);
    Ok(html.into_response())
}

/// Stand-in for the hosted CAPTCHA service: accepts any non-empty token.
pub(crate) struct DemoCaptchaVerifier;

#[async_trait]
impl CaptchaVerifier for DemoCaptchaVerifier {
    async fn verify(&self, _secret: &str, token: &str) -> bool {
        tracing::warn!("Demo CAPTCHA verifier in use, token is not checked remotely");
        !token.is_empty()
    }
}
