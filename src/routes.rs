//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Banner with the listening port
//! - `GET  /ping`      - Heartbeat
//! - `/api/v1/*`       - REST API
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when missing and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler answers 500 instead of dropping the connection
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{home_handler, ping_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/ping", get(ping_handler))
        .nest("/api/v1", api::routes::api_routes())
        .with_state(state);

    with_middleware(router)
}

/// Wraps a router in the service's middleware stack, outermost first:
/// path normalization, request id, tracing, response id propagation,
/// panic recovery.
pub fn with_middleware(router: Router) -> NormalizePath<Router> {
    let router = router
        .layer(CatchPanicLayer::new())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
