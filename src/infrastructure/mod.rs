//! Infrastructure layer for process-local resources.
//!
//! # Modules
//!
//! - [`cache`] - Insight caching (in-memory and no-op implementations)

pub mod cache;
