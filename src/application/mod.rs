//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: it derives cache keys, consults
//! the response cache and calls into the pure domain functions. Handlers talk
//! to services, never to the cache directly.
//!
//! # Available Services
//!
//! - [`services::prediction_service::PredictionService`] - Cached zodiac insight computation

pub mod services;
