//! Domain layer: pure insight logic with no I/O.
//!
//! - [`zodiac`] - Birth date parsing and sun-sign lookup
//! - [`insight`] - Trait table and insight text composition
//! - [`translation`] - Single-entry Hindi translation placeholder
//! - [`entities`] - Birth details and insight records
//! - [`error`] - Domain failures
//!
//! Every function here is synchronous and side-effect free. Caching and HTTP
//! concerns live in [`crate::infrastructure`] and [`crate::api`].

pub mod entities;
pub mod error;
pub mod insight;
pub mod translation;
pub mod zodiac;
