//! Tailoring pipeline: build prompt → single provider call → extract JSON.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::TailorError;
use crate::llm_client::{CompletionProvider, CompletionRequest};
use crate::tailor::extractor::parse_reply;
use crate::tailor::models::{TailorRequest, TailoredResult};
use crate::tailor::prompts::build_prompt;

/// Runs one tailoring request against `provider`.
///
/// The parsed reply is returned unchanged even when it does not match
/// [`TailoredResult`]; a mismatch is only logged.
pub async fn tailor_application(
    provider: &dyn CompletionProvider,
    api_key: &str,
    request: &TailorRequest,
) -> Result<Value, TailorError> {
    let prompt = build_prompt(&request.resume_text, &request.job_description);
    debug!(
        "Tailoring prompt built: resume_chars={}, jd_chars={}",
        request.resume_text.len(),
        request.job_description.len()
    );

    let reply = provider
        .complete(api_key, &CompletionRequest::user_prompt(prompt))
        .await?;

    let result = parse_reply(&reply).map_err(TailorError::MalformedResponse)?;

    // Forwarded as-is; the caller will see the model's own "error" key.
    if result.get("error").is_some() {
        warn!("Model reply contains an \"error\" key; forwarding it unchanged");
    }

    match TailoredResult::deserialize(&result) {
        Ok(tailored) => info!(
            "Successfully processed application tailoring: match_score={}, bullets={}",
            tailored.match_score,
            tailored.resume_bullets.len()
        ),
        Err(e) => {
            warn!("Model reply differs from the expected result shape ({e}); returning it as-is");
            info!("Successfully processed application tailoring");
        }
    }

    Ok(result)
}
