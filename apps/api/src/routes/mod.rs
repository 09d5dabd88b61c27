pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::tailor::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/tailor", post(handlers::handle_tailor))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Open policy: the service holds no caller-reachable secrets.
        .layer(CorsLayer::permissive())
}
