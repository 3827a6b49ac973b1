//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, state construction, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the response cache selected by configuration.
///
/// # Errors
///
/// Returns an error if the configured capacity is zero.
pub fn build_cache(config: &Config) -> Result<Arc<dyn CacheService>> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled (NullCache)");
        return Ok(Arc::new(NullCache::new()));
    }

    let cache = MemoryCache::new(config.cache_capacity()?, config.cache_ttl());
    tracing::info!(
        "Cache enabled (in-memory, capacity: {}, TTL: {}s)",
        cache.capacity(),
        cache.ttl().as_secs()
    );
    Ok(Arc::new(cache))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Response cache (MemoryCache, or NullCache when disabled)
/// - Application state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config)?;
    let state = AppState::new(cache);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
