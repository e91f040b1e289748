//! Combined router for the site's API endpoints

use axum::Router;
use std::sync::Arc;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use portfolio_site::CaptchaVerifier;

/// Create a combined router for the site's API endpoints
///
/// Mount it under [`SITE_API_PREFIX`](portfolio_site::SITE_API_PREFIX). The endpoints are:
/// - `POST {prefix}/contact` - contact form submission
/// - `GET {prefix}/session` - 200 with a session cookie, 401 without
/// - `POST {prefix}/session` - start a session
/// - `POST {prefix}/session/logout` - end the session
pub fn site_router(verifier: Arc<dyn CaptchaVerifier>) -> Router {
    site_router_no_trace(verifier).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`site_router`] without the HTTP tracing middleware.
pub fn site_router_no_trace(verifier: Arc<dyn CaptchaVerifier>) -> Router {
    Router::new()
        .nest("/contact", super::contact::router(verifier))
        .nest("/session", super::session::router())
}
