use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use portfolio_site::{ContactError, SessionError};
use serde_json::json;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                SessionError::Cookie(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::error!("Session error: {e}");
            (status, e.to_string())
        })
    }
}

/// A rejected contact form submission, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ContactRejection(pub ContactError);

impl From<ContactError> for ContactRejection {
    fn from(e: ContactError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ContactRejection {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ContactError::Internal(ref detail) => {
                tracing::error!("Contact form error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
