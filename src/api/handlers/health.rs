//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": {
///       "status": "ok",
///       "message": "Entries: 3"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache_check = check_cache(&state).await;

    let all_healthy = cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { cache: cache_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the cache backend and reports its size.
///
/// The in-process caches always report healthy; the error branch covers any
/// [`CacheService`](crate::infrastructure::cache::CacheService) whose
/// `health_check` can fail.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Entries: {}", state.cache.entry_count())),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Cache unavailable".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::MockCacheService;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unhealthy_cache_reports_degraded() {
        let mut mock_cache = MockCacheService::new();
        mock_cache.expect_health_check().times(1).returning(|| false);
        mock_cache.expect_entry_count().times(0);

        let state = AppState::new(Arc::new(mock_cache));

        let (status, Json(body)) = health_handler(State(state)).await.unwrap_err();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.checks.cache.status, "error");
        assert_eq!(body.checks.cache.message.as_deref(), Some("Cache unavailable"));
    }

    #[tokio::test]
    async fn test_healthy_cache_reports_entry_count() {
        let mut mock_cache = MockCacheService::new();
        mock_cache.expect_health_check().returning(|| true);
        mock_cache.expect_entry_count().returning(|| 7);

        let state = AppState::new(Arc::new(mock_cache));

        let Json(body) = health_handler(State(state)).await.unwrap();

        assert_eq!(body.status, "healthy");
        assert_eq!(body.checks.cache.message.as_deref(), Some("Entries: 7"));
    }
}
