mod common;

use axum::http::StatusCode;
use zodiac_insight::prelude::CacheService;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, cache) = common::create_test_state();
    let server = common::create_app_server(state);

    let response = server
        .post("/predict/")
        .json(&common::birth_details("Asha", "1990-07-23", "06:30", "Paris"))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["zodiac"], "Leo");
    assert_eq!(json["insight"], common::LEO_EN);

    server
        .post("/predict/hindi/")
        .json(&common::birth_details("Asha", "1990-07-23", "06:30", "Paris"))
        .await
        .assert_status_ok();

    server.get("/health/").await.assert_status_ok();

    assert_eq!(cache.entry_count(), 2);
}

#[tokio::test]
async fn test_predict_served_through_full_stack() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_app_server(state);

    let response = server
        .post("/predict")
        .json(&common::birth_details("Asha", "2024-13-01", "06:30", "Paris"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], common::INVALID_DATE_MESSAGE);
}

#[tokio::test]
async fn test_rate_limit_after_burst() {
    let (state, _cache) = common::create_test_state();
    let server = common::create_app_server(state);
    let body = common::birth_details("Asha", "1990-07-23", "06:30", "Paris");

    for _ in 0..100 {
        server.post("/predict").json(&body).await.assert_status_ok();
    }

    // Tokens refill at 2/s, so a slow runner may get a few more through.
    let mut limited = false;
    for _ in 0..20 {
        let response = server.post("/predict").json(&body).await;
        if response.status_code() == StatusCode::TOO_MANY_REQUESTS {
            limited = true;
            break;
        }
        response.assert_status_ok();
    }
    assert!(limited, "burst overflow should be rejected with 429");

    // Health is outside the limiter.
    server.get("/health").await.assert_status_ok();
}
