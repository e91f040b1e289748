use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use std::sync::Arc;

use crate::error::ContactRejection;
use portfolio_site::{
    CaptchaVerifier, ContactError, ContactForm, ContactReceipt, submit_contact_form,
};

pub(super) fn router(verifier: Arc<dyn CaptchaVerifier>) -> Router {
    Router::new()
        .route("/", post(submit))
        .with_state(verifier)
}

async fn submit(
    State(verifier): State<Arc<dyn CaptchaVerifier>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ContactRejection> {
    let Json(form) = payload.map_err(|e| ContactError::Internal(e.body_text()))?;
    let receipt = submit_contact_form(&form, verifier.as_ref()).await?;
    Ok(Json(receipt))
}
