//! Insight prediction service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{AstroInsight, BirthDetails, Language};
use crate::domain::insight::compose_insight;
use crate::domain::zodiac::resolve_sign;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Separator between the parts of a cache key.
const KEY_DELIMITER: &str = "_";

/// Service producing zodiac insights with a read-through cache.
///
/// The cache is injected, so independent instances (and tests) never share
/// state unless they share the same [`CacheService`].
pub struct PredictionService {
    cache: Arc<dyn CacheService>,
}

impl PredictionService {
    /// Creates a new prediction service backed by `cache`.
    pub fn new(cache: Arc<dyn CacheService>) -> Self {
        Self { cache }
    }

    /// Derives the cache key for a request.
    ///
    /// The key is `name_birthdate_birthplace`, with `_hi` appended for Hindi.
    /// `birth_time` does not take part, so requests differing only in birth
    /// time share an entry.
    pub fn cache_key(details: &BirthDetails, language: Language) -> String {
        let mut parts = vec![
            details.name.as_str(),
            details.birth_date.as_str(),
            details.birth_place.as_str(),
        ];
        parts.extend(language.cache_key_suffix());
        parts.join(KEY_DELIMITER)
    }

    /// Returns the insight for `details` in `language`.
    ///
    /// # Request Flow
    ///
    /// 1. Derive the cache key
    /// 2. On cache hit, return the stored insight unchanged
    /// 3. On miss, resolve the sign, compose the text, store and return it
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the message
    /// `"Invalid birth_date format. Use YYYY-MM-DD"` if `birth_date` is not a
    /// valid date. Nothing is cached in that case.
    pub async fn predict(
        &self,
        details: &BirthDetails,
        language: Language,
    ) -> Result<AstroInsight, AppError> {
        let cache_key = Self::cache_key(details, language);

        if let Some(cached) = self.cache.get_insight(&cache_key).await {
            metrics::counter!("insight_cache_hits_total", "language" => language.code())
                .increment(1);
            return Ok(cached);
        }
        metrics::counter!("insight_cache_misses_total", "language" => language.code())
            .increment(1);

        let insight = Self::compute(details, language)?;
        debug!("Computed {} insight for {}", insight.zodiac, cache_key);

        self.cache.set_insight(&cache_key, insight.clone()).await;

        Ok(insight)
    }

    /// Computes an insight without touching the cache.
    pub fn compute(details: &BirthDetails, language: Language) -> Result<AstroInsight, AppError> {
        let zodiac = resolve_sign(&details.birth_date)?;
        let insight = compose_insight(zodiac, &details.birth_place, language);

        Ok(AstroInsight::new(zodiac, insight, language))
    }
}
