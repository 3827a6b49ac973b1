//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /predict`       - English insight (rate limited)
//! - `POST /predict/hindi` - Hindi insight (rate limited)
//! - `GET  /health`        - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let prediction_router = api::routes::prediction_routes();
    let prediction_router = if behind_proxy {
        prediction_router.layer(rate_limit::proxied_layer())
    } else {
        prediction_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(prediction_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
