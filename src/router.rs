use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::verify::{check_status, generate_code, home, submit_code};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(home))
        // Code lifecycle
        .route("/generate-code", post(generate_code))
        .route("/submit-code", post(submit_code))
        .route("/check-status/{roblox_id}", get(check_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
