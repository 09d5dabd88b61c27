use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "AI Job Application Coach API",
        "status": "running"
    }))
}

/// GET /health
/// Liveness only; does not check the provider or the credential.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
