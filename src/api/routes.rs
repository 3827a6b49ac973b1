//! API route configuration.

use crate::api::handlers::{predict_handler, predict_hindi_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Prediction routes.
///
/// # Endpoints
///
/// - `POST /predict`       - English insight
/// - `POST /predict/hindi` - Hindi insight
pub fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/predict/hindi", post(predict_hindi_handler))
}
