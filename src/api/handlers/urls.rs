//! Handlers for alias management (create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::urls::{CreateUrlRequest, CreateUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias for a URL.
///
/// # Endpoint
///
/// `POST /api/v1/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "alias": "aB3xY9", "shortUrl": "http://localhost:8080/aB3xY9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or an empty URL.
/// Returns 409 Conflict if no free alias was found within the retry budget.
pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state.link_service.create(payload.url).await?;

    Ok(Json(created.into()))
}

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist, including when it was
/// already deleted.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/urls/{alias}`. Reserved; answers 501.
pub async fn get_url_handler(Path(alias): Path<String>) -> AppError {
    AppError::not_implemented(
        "Fetching a single alias is not supported",
        json!({ "alias": alias }),
    )
}

/// `PUT /api/v1/urls/{alias}`. Reserved; answers 501.
pub async fn update_url_handler(Path(alias): Path<String>) -> AppError {
    AppError::not_implemented(
        "Updating an alias is not supported",
        json!({ "alias": alias }),
    )
}
