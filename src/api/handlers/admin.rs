//! Handler for the paginated admin listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::pagination::{ListUrlsQuery, ListUrlsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored aliases, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/admin/urls`
///
/// # Query Parameters
///
/// - `page` (optional): Page number, default 1. Non-positive or non-numeric
///   values fall back to 1.
/// - `limit` (optional): Items per page, default 20, capped at 100.
///
/// Repeated keys use their first value. A query string that cannot be decoded
/// is treated as empty.
///
/// # Response
///
/// ```json
/// {
///   "total": 25,
///   "page": 2,
///   "limit": 20,
///   "totalPages": 2,
///   "items": [{ "alias": "aB3xY9", "url": "https://example.com", "clicks": 0 }]
/// }
/// ```
///
/// # Errors
///
/// Returns 503/500 when the store is unavailable.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListUrlsResponse>, AppError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = ListUrlsQuery::from_pairs(&pairs);

    let page = state.query_service.list(params.page_request()).await?;

    Ok(Json(page.into()))
}
