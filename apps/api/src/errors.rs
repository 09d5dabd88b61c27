use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Errors that escape a handler as a non-200 response.
///
/// Provider and parsing failures never land here: `/tailor` reports them in the
/// 200 body (see [`TailorError`]). Only request-shape problems and a missing
/// credential change the status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::InvalidBody(rejection) => {
                tracing::warn!("Rejected request body: {rejection}");
                (rejection.status(), rejection.body_text())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Failures of a single tailoring run. Both kinds are reported to the caller
/// as an `{"error": ...}` body with status 200.
#[derive(Debug, Error)]
pub enum TailorError {
    #[error("{0}")]
    Provider(#[from] LlmError),

    #[error("Failed to generate structured response")]
    MalformedResponse(#[source] serde_json::Error),
}

impl TailorError {
    /// The message placed in the ErrorResult body.
    pub fn user_message(&self) -> String {
        match self {
            TailorError::Provider(e) => format!("Processing failed: {e}"),
            TailorError::MalformedResponse(_) => self.to_string(),
        }
    }
}
