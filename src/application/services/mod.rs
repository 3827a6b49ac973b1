//! Business logic services for the application layer.

pub mod prediction_service;

pub use prediction_service::PredictionService;
