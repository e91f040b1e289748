use axum::{
    Router,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::convert::Infallible;

use crate::error::IntoResponseError;
use portfolio_site::{
    HeaderCookieStore, SESSION_COOKIE_NAME, SessionToken, get_session_token,
    prepare_logout_response, prepare_session_response,
};

/// Session token presented by the client, available as an Axum extractor
///
/// Extraction fails with `401 Unauthorized` when the request carries no
/// `auth-session` cookie. Use `Option<AuthSession>` for handlers that work
/// with or without a session.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use portfolio_site_axum::AuthSession;
///
/// async fn handler(session: AuthSession) -> String {
///     format!("session {}", session.token)
/// }
///
/// let app: Router = Router::new().route("/me", get(handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub token: SessionToken,
}

pub struct SessionRejection;

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Unauthorized");
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let store = HeaderCookieStore::from_request_headers(&parts.headers);
        let token = get_session_token(&store).ok_or_else(|| {
            tracing::debug!("No session cookie {SESSION_COOKIE_NAME:?} in request");
            SessionRejection
        })?;
        Ok(AuthSession { token })
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, SessionRejection> =
            <AuthSession as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}

pub(super) fn router() -> Router {
    Router::new()
        .route("/", get(session_status).post(start_session))
        .route("/logout", post(logout))
}

async fn start_session(headers: HeaderMap) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (response_headers, _token) = prepare_session_response(&headers).into_response_error()?;
    Ok((StatusCode::NO_CONTENT, response_headers))
}

async fn logout(headers: HeaderMap) -> Result<impl IntoResponse, (StatusCode, String)> {
    let response_headers = prepare_logout_response(&headers).into_response_error()?;
    Ok((StatusCode::NO_CONTENT, response_headers))
}

async fn session_status(session: Option<AuthSession>) -> StatusCode {
    match session {
        Some(_) => StatusCode::OK,
        None => StatusCode::UNAUTHORIZED,
    }
}
