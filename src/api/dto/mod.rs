//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Requests are
//! converted into domain entities before reaching the services.

pub mod health;
pub mod predict;
