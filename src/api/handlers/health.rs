//! Liveness endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// `GET /api/v1/health`. Always healthy while the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// `GET /ping` heartbeat for load balancers.
pub async fn ping_handler() -> &'static str {
    "."
}

/// `GET /` banner.
pub async fn home_handler(State(state): State<AppState>) -> String {
    format!("Server running on port {}\n", state.port())
}
