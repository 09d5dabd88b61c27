//! Axum route handler for the tailoring endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, TailorError};
use crate::state::AppState;
use crate::tailor::generator::tailor_application;
use crate::tailor::models::{TailorOutcome, TailorRequest};

/// POST /tailor
///
/// Body shape errors and a missing credential are the only non-200 answers,
/// and both are returned before the provider is called. Every other failure
/// becomes an `{"error": ...}` body.
pub async fn handle_tailor(
    State(state): State<AppState>,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<TailorOutcome, AppError> {
    let Json(request) = payload?;
    let api_key = state.config.require_api_key()?;

    let span = info_span!("tailor", request_id = %Uuid::new_v4());
    let result = tailor_application(state.llm.as_ref(), api_key, &request)
        .instrument(span.clone())
        .await;

    let outcome = match result {
        Ok(value) => TailorOutcome::Tailored(value),
        Err(err) => {
            span.in_scope(|| match &err {
                TailorError::MalformedResponse(e) => {
                    error!("Failed to parse JSON response from AI model: {e}")
                }
                TailorError::Provider(e) => error!("Error processing request: {e}"),
            });
            TailorOutcome::Failed(err.into())
        }
    };

    Ok(outcome)
}
