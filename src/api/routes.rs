//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, health_handler, list_urls_handler,
    stats_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /health`          - Liveness check
/// - `POST   /urls`            - Create an alias
/// - `GET    /urls/{alias}`    - Reserved (501)
/// - `PUT    /urls/{alias}`    - Reserved (501)
/// - `DELETE /urls/{alias}`    - Delete an alias
/// - `GET    /admin/urls`      - Paginated listing
/// - `GET    /stats`           - Aggregate statistics
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/urls", post(create_url_handler))
        .route(
            "/urls/{alias}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/admin/urls", get(list_urls_handler))
        .route("/stats", get(stats_handler))
}
