//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::PredictionService;
use crate::infrastructure::cache::CacheService;

/// Handler state.
///
/// Cloning is cheap; all members are reference counted. The cache is owned
/// here rather than held in a global, so each state (and each test) gets an
/// isolated store.
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds the state around a cache implementation.
    pub fn new(cache: Arc<dyn CacheService>) -> Self {
        Self {
            prediction_service: Arc::new(PredictionService::new(cache.clone())),
            cache,
        }
    }
}
