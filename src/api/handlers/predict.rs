//! Handlers for the zodiac prediction endpoints.

use axum::{Json, extract::State};

use crate::api::dto::predict::{PredictRequest, PredictResponse};
use crate::api::extract::AppJson;
use crate::domain::entities::{BirthDetails, Language};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the English insight for a birth date.
///
/// # Endpoint
///
/// `POST /predict`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Asha",
///   "birth_date": "1990-07-23",
///   "birth_time": "06:30",
///   "birth_place": "Paris"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "zodiac": "Leo",
///   "insight": "Your innate leadership and warmth will shine today. Embrace spontaneity and avoid overthinking.",
///   "language": "en"
/// }
/// ```
///
/// # Caching
///
/// Responses are cached for 24 hours under `name_birthdate_birthplace`.
/// `birth_time` is not part of the key.
///
/// # Errors
///
/// Returns 400 Bad Request with `"Invalid birth_date format. Use YYYY-MM-DD"`
/// if `birth_date` is not a valid date, and 422 Unprocessable Entity if a
/// field is missing or not a string.
pub async fn predict_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    predict(&state, payload, Language::En).await
}

/// Returns the Hindi insight for a birth date.
///
/// # Endpoint
///
/// `POST /predict/hindi`
///
/// Same request body and errors as [`predict_handler`]. The response carries
/// `"language": "hi"` and is cached under `name_birthdate_birthplace_hi`.
/// Only one sentence has a Hindi rendering; other insights are returned in
/// English.
pub async fn predict_hindi_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    predict(&state, payload, Language::Hi).await
}

async fn predict(
    state: &AppState,
    payload: PredictRequest,
    language: Language,
) -> Result<Json<PredictResponse>, AppError> {
    let details: BirthDetails = payload.into();

    let insight = state
        .prediction_service
        .predict(&details, language)
        .await?;

    Ok(Json(insight.into()))
}
