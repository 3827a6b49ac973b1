#![allow(dead_code)]

use axum::{Router, ServiceExt, extract::Request, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use zodiac_insight::api::handlers::health_handler;
use zodiac_insight::api::routes::prediction_routes;
use zodiac_insight::infrastructure::cache::{CacheService, MemoryCache};
use zodiac_insight::routes::app_router;
use zodiac_insight::state::AppState;

pub const LEO_EN: &str = "Your innate leadership and warmth will shine today. Embrace spontaneity and avoid overthinking.";

pub const LEO_HI: &str =
    "आज आपका जन्मजात नेतृत्व और गर्मजोशी चमकेगी। सहजता को अपनाएं और अधिक सोचने से बचें।";

pub const INVALID_DATE_MESSAGE: &str = "Invalid birth_date format. Use YYYY-MM-DD";

pub fn create_test_state() -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::default());
    let state = AppState::new(cache.clone() as Arc<dyn CacheService>);
    (state, cache)
}

/// Routes without rate limiting, which needs a real peer address.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(prediction_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Full production router over a real socket, so the rate limiter sees peer addresses.
pub fn create_app_server(state: AppState) -> TestServer {
    let app = app_router(state, false);

    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}

pub fn birth_details(name: &str, birth_date: &str, birth_time: &str, birth_place: &str) -> Value {
    json!({
        "name": name,
        "birth_date": birth_date,
        "birth_time": birth_time,
        "birth_place": birth_place
    })
}
