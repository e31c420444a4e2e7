mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_down() {
    let state = shortly::AppState::new(std::sync::Arc::new(common::DownStore), common::BASE_URL);
    let server = common::server_for(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_static_assets_served() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
}
