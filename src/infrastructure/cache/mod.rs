//! Response cache for composed insights.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process LRU store with per-entry TTL
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::{DEFAULT_CAPACITY, DEFAULT_TTL, MemoryCache};
pub use null_cache::NullCache;
pub use service::CacheService;

#[cfg(test)]
pub use service::MockCacheService;
