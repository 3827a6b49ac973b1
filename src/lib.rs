//! # Zodiac Insight
//!
//! A small HTTP service that maps a birth date to its zodiac sign and returns
//! a short canned personality insight, optionally in Hindi. Responses are
//! cached in memory for 24 hours.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Sign resolution, insight composition, translation stub
//! - **Application Layer** ([`application`]) - Cache-aware prediction service
//! - **Infrastructure Layer** ([`infrastructure`]) - Response cache implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /predict` - English insight
//! - `POST /predict/hindi` - Hindi insight
//! - `GET /health` - Health check
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST http://127.0.0.1:8000/predict \
//!   -H 'Content-Type: application/json' \
//!   -d '{"name":"Asha","birth_date":"1990-07-23","birth_time":"06:30","birth_place":"Paris"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PredictionService;
    pub use crate::domain::entities::{AstroInsight, BirthDetails, Language};
    pub use crate::domain::zodiac::ZodiacSign;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
