//! In-process LRU cache with per-entry TTL.

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::service::CacheService;
use crate::domain::entities::AstroInsight;

/// Default maximum number of cached insights.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Default entry lifetime: 24 hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

struct CacheEntry {
    insight: AstroInsight,
    /// `None` when `now + ttl` is past what the clock can represent.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Bounded, time-expiring insight store.
///
/// A single mutex guards the LRU map, so concurrent `get`/`set` calls are
/// serialized. Expiry is enforced lazily: an expired entry is dropped when it
/// is looked up, and otherwise ages out through LRU eviction.
///
/// Time is read from [`tokio::time::Instant`], which follows the paused test
/// clock.
pub struct MemoryCache {
    inner: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding at most `capacity` entries, each living `ttl`.
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        debug!(
            "Using MemoryCache (capacity: {}, TTL: {}s)",
            capacity,
            ttl.as_secs()
        );
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_insight(&self, key: &str) -> Option<AstroInsight> {
        let mut cache = self.inner.lock();

        let expired = match cache.get(key) {
            Some(entry) if entry.is_live(Instant::now()) => {
                debug!("Cache HIT: {}", key);
                return Some(entry.insight.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            cache.pop(key);
            debug!("Cache EXPIRED: {}", key);
        } else {
            debug!("Cache MISS: {}", key);
        }
        None
    }

    async fn set_insight(&self, key: &str, insight: AstroInsight) {
        let mut cache = self.inner.lock();
        let entry = CacheEntry {
            insight,
            expires_at: Instant::now().checked_add(self.ttl),
        };

        if let Some((evicted, _)) = cache.push(key.to_string(), entry)
            && evicted != key
        {
            debug!("Cache EVICT: {}", evicted);
        }
        debug!("Cache SET: {} (TTL: {}s)", key, self.ttl.as_secs());
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn entry_count(&self) -> usize {
        self.inner.lock().len()
    }
}
