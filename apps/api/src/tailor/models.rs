use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::TailorError;

/// Request body for `POST /tailor`. Both fields are required; empty strings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// The shape the prompt asks the model for.
///
/// Not enforced: the parsed reply is returned to the caller as-is, and this type
/// is only used to notice (and log) when the model drifts from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredResult {
    /// 5 – 7 bullets expected
    pub resume_bullets: Vec<String>,
    pub cover_letter: String,
    /// top 5 expected
    pub skills: Vec<String>,
    pub match_score: u32, // 0 – 100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl From<TailorError> for ErrorResult {
    fn from(err: TailorError) -> Self {
        ErrorResult {
            error: err.user_message(),
        }
    }
}

/// Outcome of a tailoring request. Both variants are answered with 200; the
/// caller tells them apart by the presence of an `error` key.
#[derive(Debug)]
pub enum TailorOutcome {
    Tailored(Value),
    Failed(ErrorResult),
}

impl IntoResponse for TailorOutcome {
    fn into_response(self) -> Response {
        match self {
            TailorOutcome::Tailored(value) => (StatusCode::OK, Json(value)).into_response(),
            TailorOutcome::Failed(error) => (StatusCode::OK, Json(error)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_request_requires_both_fields() {
        let missing = serde_json::from_value::<TailorRequest>(json!({ "resume_text": "r" }));
        assert!(missing.is_err());

        let wrong_type = serde_json::from_value::<TailorRequest>(json!({
            "resume_text": 42,
            "job_description": "jd"
        }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_request_accepts_empty_strings() {
        let request: TailorRequest =
            serde_json::from_value(json!({ "resume_text": "", "job_description": "" })).unwrap();
        assert!(request.resume_text.is_empty());
        assert!(request.job_description.is_empty());
    }

    #[tokio::test]
    async fn test_failed_outcome_is_200_with_error_only() {
        let response = TailorOutcome::Failed(ErrorResult {
            error: "Failed to generate structured response".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate structured response" })
        );
    }

    #[tokio::test]
    async fn test_tailored_outcome_passes_value_through() {
        // match_score as a string is not coerced
        let value = json!({ "resume_bullets": [], "match_score": "high" });
        let response = TailorOutcome::Tailored(value.clone()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, value);
    }
}
