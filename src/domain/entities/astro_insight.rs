//! Insight entity returned to callers and stored in the response cache.

use serde::{Deserialize, Serialize};

use crate::domain::zodiac::ZodiacSign;

/// Language an insight is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Suffix appended to cache keys for this language.
    ///
    /// English keys carry no suffix.
    pub fn cache_key_suffix(self) -> Option<&'static str> {
        match self {
            Language::En => None,
            Language::Hi => Some("hi"),
        }
    }
}

/// A composed zodiac insight.
///
/// Immutable once constructed; cached values are cloned out of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstroInsight {
    pub zodiac: ZodiacSign,
    pub insight: String,
    pub language: Language,
}

impl AstroInsight {
    pub fn new(zodiac: ZodiacSign, insight: String, language: Language) -> Self {
        Self {
            zodiac,
            insight,
            language,
        }
    }
}
