//! DTOs for the prediction endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AstroInsight, BirthDetails, Language};
use crate::domain::zodiac::ZodiacSign;

/// Birth details submitted to `/predict` and `/predict/hindi`.
///
/// All four fields are required strings; a missing or non-string field is
/// rejected by the JSON extractor before any business logic runs. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
}

impl From<PredictRequest> for BirthDetails {
    fn from(request: PredictRequest) -> Self {
        BirthDetails {
            name: request.name,
            birth_date: request.birth_date,
            birth_time: request.birth_time,
            birth_place: request.birth_place,
        }
    }
}

/// Composed insight returned by the prediction endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictResponse {
    pub zodiac: ZodiacSign,
    pub insight: String,
    pub language: Language,
}

impl From<AstroInsight> for PredictResponse {
    fn from(insight: AstroInsight) -> Self {
        Self {
            zodiac: insight.zodiac,
            insight: insight.insight,
            language: insight.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: PredictRequest = serde_json::from_value(json!({
            "name": "Asha",
            "birth_date": "1990-07-23",
            "birth_time": "06:30",
            "birth_place": "Paris",
            "extra": 42
        }))
        .unwrap();

        let details = BirthDetails::from(request);
        assert_eq!(details.birth_place, "Paris");
    }

    #[test]
    fn test_request_rejects_missing_or_mistyped_fields() {
        let missing = serde_json::from_value::<PredictRequest>(json!({
            "name": "Asha",
            "birth_date": "1990-07-23",
            "birth_place": "Paris"
        }));
        assert!(missing.is_err());

        let mistyped = serde_json::from_value::<PredictRequest>(json!({
            "name": "Asha",
            "birth_date": 19900723,
            "birth_time": "06:30",
            "birth_place": "Paris"
        }));
        assert!(mistyped.is_err());
    }

    #[test]
    fn test_response_wire_shape() {
        let insight = AstroInsight::new(ZodiacSign::Virgo, "text".to_string(), Language::Hi);

        assert_eq!(
            serde_json::to_value(PredictResponse::from(insight)).unwrap(),
            json!({ "zodiac": "Virgo", "insight": "text", "language": "hi" })
        );
    }
}
