//! Core domain entities.
//!
//! - [`BirthDetails`] - Caller-supplied birth information
//! - [`AstroInsight`] - Composed insight, the unit stored in the response cache
//! - [`Language`] - Output language of an insight

pub mod astro_insight;
pub mod birth_details;

pub use astro_insight::{AstroInsight, Language};
pub use birth_details::BirthDetails;
