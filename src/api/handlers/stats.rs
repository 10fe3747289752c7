//! Handler for aggregate statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns store-wide totals and the most clicked alias.
///
/// # Endpoint
///
/// `GET /api/v1/stats`
///
/// # Response
///
/// ```json
/// {
///   "totalUrls": 3,
///   "totalClicks": 16,
///   "topUrl": { "alias": "aB3xY9", "url": "https://example.com", "clicks": 9 }
/// }
/// ```
///
/// `topUrl` is omitted when no aliases exist.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.query_service.stats().await?;

    Ok(Json(stats.into()))
}
