//! Placeholder Hindi translation.
//!
//! Only one sentence has a known rendering. Everything else passes through
//! unchanged, so callers must not assume any text outside the table is
//! translated.

const HINDI_TRANSLATIONS: &[(&str, &str)] = &[(
    "Your innate leadership and warmth will shine today. Embrace spontaneity and avoid overthinking.",
    "आज आपका जन्मजात नेतृत्व और गर्मजोशी चमकेगी। सहजता को अपनाएं और अधिक सोचने से बचें।",
)];

/// Returns the Hindi rendering of `text` if it is an exact table match,
/// otherwise `text` itself.
pub fn translate_to_hindi(text: &str) -> &str {
    HINDI_TRANSLATIONS
        .iter()
        .find(|(english, _)| *english == text)
        .map(|(_, hindi)| *hindi)
        .unwrap_or(text)
}
