//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod predict;

pub use health::health_handler;
pub use predict::{predict_handler, predict_hindi_handler};
