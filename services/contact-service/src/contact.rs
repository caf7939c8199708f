use axum::{
    Json,
    body::Bytes,
    extract::{Request, State, rejection::BytesRejection},
    middleware::Next,
    response::Response,
};
use folio_api_types::{ContactMessage, ContactResponse};
use std::any::Any;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::AppState;
use crate::error::{AppError, rejected_response};

/// Runs every contact request inside a span carrying a fresh `request_id`.
///
/// Sits outside `CatchPanicLayer` so the panic log line is tagged too.
pub(crate) async fn with_request_id(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    next.run(request)
        .instrument(info_span!("contact_request", %request_id))
        .await
}

/// POST /api/contact
///
/// Takes the raw body so malformed JSON and body-read failures (e.g. the
/// default body size limit) land in the same 400 shape as a failed
/// validation instead of axum's extractor rejections.
pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let result = match body {
        Ok(body) => accept(&state, &body).await,
        Err(rejection) => Err(AppError::Body(rejection)),
    };

    match result {
        Ok(saved) => {
            info!(message_id = saved.id, "contact message stored");
            Ok(Json(ContactResponse::accepted(saved.id)))
        }
        Err(err) => {
            if err.is_server_fault() {
                error!("contact submission failed: {}", err);
            } else {
                debug!("contact submission rejected: {}", err);
            }
            Err(err)
        }
    }
}

async fn accept(state: &AppState, body: &[u8]) -> Result<ContactMessage, AppError> {
    let raw: serde_json::Value = serde_json::from_slice(body)?;
    let submission = folio_validator::validate(&raw)?;
    state.store.save(submission).await.map_err(AppError::Storage)
}

pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };

    let err = AppError::Panic(detail);
    error!("contact submission failed: {}", err);
    rejected_response()
}
