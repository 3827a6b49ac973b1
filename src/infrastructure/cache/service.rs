//! Cache service trait for composed insights.

use async_trait::async_trait;

use crate::domain::entities::AstroInsight;

/// Store for previously composed insights, keyed by a derived request key.
///
/// Implementations must be thread-safe. Lookups never fail: a missing,
/// expired, or evicted entry is reported as `None` and the caller recomputes.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - Bounded in-process store with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached insight for `key`.
    ///
    /// # Returns
    ///
    /// - `Some(insight)` on cache hit
    /// - `None` if the key was never stored, has expired, or was evicted
    async fn get_insight(&self, key: &str) -> Option<AstroInsight>;

    /// Stores an insight under `key`, replacing any previous value.
    ///
    /// The entry's lifetime starts at insertion. When the store is full an
    /// existing entry is evicted to make room.
    async fn set_insight(&self, key: &str, insight: AstroInsight);

    /// Checks if the cache backend is usable.
    async fn health_check(&self) -> bool;

    /// Number of entries currently held, including ones not yet found expired.
    fn entry_count(&self) -> usize;
}
