mod common;

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use zodiac_insight::api::handlers::health_handler;
use zodiac_insight::infrastructure::cache::NullCache;
use zodiac_insight::state::AppState;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_test_server(state);

    server
        .post("/predict")
        .json(&common::birth_details("Asha", "1990-07-23", "06:30", "Paris"))
        .await
        .assert_status_ok();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "Entries: 1");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = AppState::new(Arc::new(NullCache::new()));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("cache").is_some());
}
