use axum::{Router, routing::get};
use std::sync::Arc;

use portfolio_site_axum::{
    CaptchaVerifier, ROLLING_TEXT_INTERVAL, RollingText, SITE_API_PREFIX, TokioIntervalTimer,
    TracingSink, site_router,
};

mod handlers;
mod server;

use crate::{
    handlers::{AppState, DemoCaptchaVerifier, index},
    server::{init_tracing, spawn_http_server},
};

const TAGLINES: [&str; 3] = [
    "Professional Developer",
    "Engineering Coach",
    "Documentation Nerd",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let tagline = RollingText::mount(
        TAGLINES,
        *ROLLING_TEXT_INTERVAL,
        TokioIntervalTimer::new()?,
        &TracingSink,
    )?;
    let state = AppState {
        tagline: Arc::new(tagline),
    };

    let verifier: Arc<dyn CaptchaVerifier> = Arc::new(DemoCaptchaVerifier);
    let app = Router::new()
        .route("/", get(index))
        .with_state(state)
        .nest(SITE_API_PREFIX.as_str(), site_router(verifier));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    spawn_http_server(port, app).await??;
    Ok(())
}
