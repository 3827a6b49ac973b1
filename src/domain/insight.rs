//! Insight composition from a zodiac sign and birth place.

use crate::domain::entities::Language;
use crate::domain::translation::translate_to_hindi;
use crate::domain::zodiac::ZodiacSign;

/// Trait phrase used for signs without an entry in the trait table.
pub const DEFAULT_TRAIT: &str = "confidence and resilience";

/// Birth places containing this marker get a personalized second sentence.
const CULTURAL_MARKER: &str = "India";

/// Trait phrase for a sign, or `None` if the sign has no table entry.
pub fn trait_phrase(sign: ZodiacSign) -> Option<&'static str> {
    match sign {
        ZodiacSign::Leo => Some("leadership and warmth"),
        ZodiacSign::Virgo => Some("precision and practicality"),
        ZodiacSign::Libra => Some("balance and charm"),
        ZodiacSign::Aquarius
        | ZodiacSign::Pisces
        | ZodiacSign::Aries
        | ZodiacSign::Taurus
        | ZodiacSign::Gemini
        | ZodiacSign::Cancer
        | ZodiacSign::Scorpio
        | ZodiacSign::Sagittarius
        | ZodiacSign::Capricorn => None,
    }
}

/// Composes the insight text for a sign.
///
/// The English text is a fixed template around the sign's trait phrase. When
/// `birth_place` contains `"India"` (case-sensitive) a sentence quoting the
/// place verbatim is appended. For [`Language::Hi`] the result goes through
/// [`translate_to_hindi`].
pub fn compose_insight(sign: ZodiacSign, birth_place: &str, language: Language) -> String {
    let trait_text = trait_phrase(sign).unwrap_or(DEFAULT_TRAIT);
    let mut insight = format!(
        "Your innate {trait_text} will shine today. Embrace spontaneity and avoid overthinking."
    );

    if birth_place.contains(CULTURAL_MARKER) {
        insight.push_str(&format!(
            " Your cultural roots in {birth_place} may guide your decisions."
        ));
    }

    match language {
        Language::En => insight,
        Language::Hi => translate_to_hindi(&insight).to_string(),
    }
}
