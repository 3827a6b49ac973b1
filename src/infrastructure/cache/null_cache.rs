//! No-op cache implementation for disabled caching.

use super::service::CacheService;
use crate::domain::entities::AstroInsight;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled through `CACHE_ENABLED=false`. Every lookup
/// misses, so each request recomputes its insight.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_insight(&self, _key: &str) -> Option<AstroInsight> {
        None
    }

    async fn set_insight(&self, _key: &str, _insight: AstroInsight) {}

    async fn health_check(&self) -> bool {
        true
    }

    fn entry_count(&self) -> usize {
        0
    }
}
