use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_api_types::ContactResponse;
use folio_validator::ValidationError;
use thiserror::Error;

/// Failures on the contact route.
///
/// Every variant answers with the same generic 400 body; callers cannot tell
/// a bad input from a storage fault. Only the log level differs.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("unreadable request body: {0}")]
    Body(BytesRejection),

    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl AppError {
    pub(crate) fn is_server_fault(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Panic(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        rejected_response()
    }
}

pub(crate) fn rejected_response() -> Response {
    (StatusCode::BAD_REQUEST, Json(ContactResponse::rejected())).into_response()
}
