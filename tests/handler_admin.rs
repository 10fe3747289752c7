mod common;

use axum_test::TestServer;
use linksphere::infrastructure::persistence::InMemoryLinkRepository;
use serde_json::json;
use std::sync::Arc;

fn server_for(repository: Arc<InMemoryLinkRepository>) -> TestServer {
    let state = common::create_test_state(repository);
    TestServer::new(common::api_app(state)).unwrap()
}

#[tokio::test]
async fn test_list_urls_empty() {
    let server = server_for(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/api/v1/admin/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 20);
    assert_eq!(json["totalPages"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_urls_second_page() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 25).await;
    let server = server_for(repository);

    let response = server
        .get("/api/v1/admin/urls")
        .add_query_param("page", 2)
        .add_query_param("limit", 20)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 25);
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 20);
    assert_eq!(json["totalPages"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    // Newest first, so the last page holds the oldest records.
    assert_eq!(items[4]["alias"], "seed00");
    assert!(items[0].get("created_at").is_none());
}

#[tokio::test]
async fn test_list_urls_page_past_end() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 3).await;
    let server = server_for(repository);

    let response = server.get("/api/v1/admin/urls?page=5").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 3);
    assert_eq!(json["page"], 5);
    assert_eq!(json["totalPages"], 1);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_urls_limit_is_capped() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 3).await;
    let server = server_for(repository);

    let response = server.get("/api/v1/admin/urls?limit=500").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["limit"], 100);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_urls_invalid_params_fall_back() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 3).await;
    let server = server_for(repository);

    for query in ["page=0", "page=-1", "page=abc", "page=1.5", "limit=0", "limit=xyz"] {
        let response = server.get(&format!("/api/v1/admin/urls?{query}")).await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["page"], 1, "query: {query}");
        assert_eq!(json["limit"], 20, "query: {query}");
        assert_eq!(json["items"].as_array().unwrap().len(), 3, "query: {query}");
    }
}

#[tokio::test]
async fn test_created_url_appears_first_in_listing() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 2).await;
    let server = server_for(repository);

    let created = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com/new" }))
        .await
        .json::<serde_json::Value>();

    let json = server
        .get("/api/v1/admin/urls")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["total"], 3);
    assert_eq!(json["items"][0]["alias"], created["alias"]);
    assert_eq!(json["items"][0]["url"], "https://example.com/new");
    assert_eq!(json["items"][0]["clicks"], 0);
}

#[tokio::test]
async fn test_deleted_url_disappears_from_listing() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 2).await;
    let server = server_for(repository);

    server.delete("/api/v1/urls/seed01").await;

    let json = server
        .get("/api/v1/admin/urls")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["alias"], "seed00");
}

#[tokio::test]
async fn test_list_urls_repeated_keys_use_first_value() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 25).await;
    let server = server_for(repository);

    let response = server
        .get("/api/v1/admin/urls?page=2&page=3&limit=20&limit=5")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 20);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_urls_garbled_query_falls_back() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    common::seed_links(&repository, 3).await;
    let server = server_for(repository);

    let response = server.get("/api/v1/admin/urls?page=abc&page&&=&limit=").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 20);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}
