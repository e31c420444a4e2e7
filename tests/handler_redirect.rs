mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let (server, store) = common::create_test_server();
    common::seed_link(&store, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, store) = common::create_test_server();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (server, _store) = common::create_test_server();

    let created: Value = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://example.com" }))
        .await
        .json();
    let short_id = created["short_id"].as_str().unwrap().to_string();

    for _ in 0..3 {
        let response = server.get(&format!("/{}", short_id)).await;
        assert_eq!(response.status_code(), 307);
    }

    let details: Value = server
        .get(&format!("/api/links/{}", short_id))
        .await
        .json();
    assert_eq!(details["click_count"], 3);
}

#[tokio::test]
async fn test_redirect_store_down() {
    let state = shortly::AppState::new(std::sync::Arc::new(common::DownStore), common::BASE_URL);
    let server = common::server_for(state);

    let response = server.get("/1").await;

    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn test_redirect_trims_trailing_slash() {
    let (server, store) = common::create_app_server();
    common::seed_link(&store, "1", "https://example.com/target").await;

    let response = server.get("/1/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_details_page_trims_trailing_slash() {
    let (server, store) = common::create_app_server();
    common::seed_link(&store, "1", "https://example.com/target").await;

    let response = server.get("/1+/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("example.com"));
    assert!(html.contains("<dd>0</dd>"));
}
