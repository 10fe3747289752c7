mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linksphere::api::handlers::{home_handler, ping_handler};
use linksphere::infrastructure::persistence::InMemoryLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(Arc::new(InMemoryLinkRepository::new()));
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_ping_endpoint() {
    let state = common::create_test_state(Arc::new(InMemoryLinkRepository::new()));
    let app = Router::new()
        .route("/ping", get(ping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/ping").await;

    response.assert_status_ok();
    response.assert_text(".");
}

#[tokio::test]
async fn test_home_reports_port() {
    let state = common::create_test_state(Arc::new(InMemoryLinkRepository::new()));
    let app = Router::new()
        .route("/", get(home_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text_contains("Server running on port 3000");
}
