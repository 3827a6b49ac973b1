//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_ENABLED` - Set to `false` to disable response caching (default: `true`)
//! - `CACHE_CAPACITY` - Maximum cached responses (default: 100)
//! - `CACHE_TTL_SECONDS` - Lifetime of a cached response (default: 86400)
//! - `BEHIND_PROXY` - Rate limit on forwarded client IP headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Upper bound for `CACHE_CAPACITY`.
const MAX_CACHE_CAPACITY: usize = 1_000_000;

/// Upper bound for `CACHE_TTL_SECONDS`: one year.
const MAX_CACHE_TTL_SECONDS: u64 = 31_536_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, every request recomputes its insight.
    pub cache_enabled: bool,
    /// Maximum number of cached responses; the least recently used is evicted beyond it.
    pub cache_capacity: usize,
    /// Lifetime (seconds) of a cached response, counted from insertion.
    pub cache_ttl_seconds: u64,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_enabled: true,
            cache_capacity: 100,
            cache_ttl_seconds: 86_400,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(defaults.cache_enabled);

        let cache_capacity = parse_var("CACHE_CAPACITY")?.unwrap_or(defaults.cache_capacity);

        let cache_ttl_seconds =
            parse_var("CACHE_TTL_SECONDS")?.unwrap_or(defaults.cache_ttl_seconds);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            cache_enabled,
            cache_capacity,
            cache_ttl_seconds,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `cache_capacity` is outside `1..=1000000`
    /// - `cache_ttl_seconds` is outside `1..=31536000`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cache_capacity == 0 || self.cache_capacity > MAX_CACHE_CAPACITY {
            anyhow::bail!(
                "CACHE_CAPACITY must be between 1 and {}, got {}",
                MAX_CACHE_CAPACITY,
                self.cache_capacity
            );
        }

        if self.cache_ttl_seconds == 0 || self.cache_ttl_seconds > MAX_CACHE_TTL_SECONDS {
            anyhow::bail!(
                "CACHE_TTL_SECONDS must be between 1 and {}, got {}",
                MAX_CACHE_TTL_SECONDS,
                self.cache_ttl_seconds
            );
        }

        Ok(())
    }

    /// Cache capacity as a non-zero count.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero.
    pub fn cache_capacity(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.cache_capacity).context("CACHE_CAPACITY must be at least 1")
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if self.cache_enabled {
            tracing::info!(
                "  Cache: in-memory (capacity: {}, TTL: {}s)",
                self.cache_capacity,
                self.cache_ttl_seconds
            );
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Reads an optional numeric variable. Unset yields `None`; unparsable is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
