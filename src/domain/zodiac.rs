//! Sun-sign resolution from a birth date.
//!
//! Signs are assigned by scanning a fixed table of twelve inclusive
//! `(month, day)` ranges. A range may span a month boundary (Capricorn runs
//! from December 22nd to January 19th).

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::error::DomainError;

/// Accepted layout for `birth_date` values.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, then a one- or two-digit month and day.
static BIRTH_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").unwrap());

/// One of the twelve zodiac signs.
///
/// Serialized by its label, e.g. `"Aquarius"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl ZodiacSign {
    /// All signs in table order, starting at Aquarius.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
        }
    }

    /// Finds the sign for a calendar `(month, day)` pair.
    ///
    /// A pair matches a range when it falls on the start month at or after the
    /// start day, or on the end month at or before the end day. The first
    /// matching range wins; if none matches the result is Capricorn.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        SIGN_RANGES
            .iter()
            .find(|range| range.contains(month, day))
            .map(|range| range.sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive calendar range covered by a sign.
#[derive(Debug, Clone, Copy)]
struct SignRange {
    start: (u32, u32),
    end: (u32, u32),
    sign: ZodiacSign,
}

impl SignRange {
    const fn new(start: (u32, u32), end: (u32, u32), sign: ZodiacSign) -> Self {
        Self { start, end, sign }
    }

    fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

const SIGN_RANGES: [SignRange; 12] = [
    SignRange::new((1, 20), (2, 18), ZodiacSign::Aquarius),
    SignRange::new((2, 19), (3, 20), ZodiacSign::Pisces),
    SignRange::new((3, 21), (4, 19), ZodiacSign::Aries),
    SignRange::new((4, 20), (5, 20), ZodiacSign::Taurus),
    SignRange::new((5, 21), (6, 20), ZodiacSign::Gemini),
    SignRange::new((6, 21), (7, 22), ZodiacSign::Cancer),
    SignRange::new((7, 23), (8, 22), ZodiacSign::Leo),
    SignRange::new((8, 23), (9, 22), ZodiacSign::Virgo),
    SignRange::new((9, 23), (10, 22), ZodiacSign::Libra),
    SignRange::new((10, 23), (11, 21), ZodiacSign::Scorpio),
    SignRange::new((11, 22), (12, 21), ZodiacSign::Sagittarius),
    SignRange::new((12, 22), (1, 19), ZodiacSign::Capricorn),
];

/// Parses a `YYYY-MM-DD` birth date and resolves its zodiac sign.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] with the message
/// `"Invalid birth_date format. Use YYYY-MM-DD"` if the string is not a
/// valid calendar date in that layout. Signed, padded and year-zero
/// dates are rejected.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(resolve_sign("1990-07-23").unwrap(), ZodiacSign::Leo);
/// ```
pub fn resolve_sign(birth_date: &str) -> Result<ZodiacSign, DomainError> {
    if !BIRTH_DATE_SHAPE.is_match(birth_date) {
        return Err(DomainError::invalid_birth_date());
    }

    let date = NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT)
        .map_err(|_| DomainError::invalid_birth_date())?;
    if date.year() < 1 {
        return Err(DomainError::invalid_birth_date());
    }

    Ok(ZodiacSign::from_month_day(date.month(), date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::INVALID_BIRTH_DATE;

    fn sign(date: &str) -> ZodiacSign {
        resolve_sign(date).unwrap()
    }

    #[test]
    fn test_boundary_dates() {
        assert_eq!(sign("2024-01-20"), ZodiacSign::Aquarius);
        assert_eq!(sign("2024-02-18"), ZodiacSign::Aquarius);
        assert_eq!(sign("2024-02-19"), ZodiacSign::Pisces);
        assert_eq!(sign("2024-12-22"), ZodiacSign::Capricorn);
        assert_eq!(sign("2024-01-19"), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_range_starts() {
        assert_eq!(sign("2001-03-21"), ZodiacSign::Aries);
        assert_eq!(sign("2001-04-20"), ZodiacSign::Taurus);
        assert_eq!(sign("2001-05-21"), ZodiacSign::Gemini);
        assert_eq!(sign("2001-06-21"), ZodiacSign::Cancer);
        assert_eq!(sign("2001-07-23"), ZodiacSign::Leo);
        assert_eq!(sign("2001-08-23"), ZodiacSign::Virgo);
        assert_eq!(sign("2001-09-23"), ZodiacSign::Libra);
        assert_eq!(sign("2001-10-23"), ZodiacSign::Scorpio);
        assert_eq!(sign("2001-11-22"), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_range_ends() {
        assert_eq!(sign("2001-03-20"), ZodiacSign::Pisces);
        assert_eq!(sign("2001-07-22"), ZodiacSign::Cancer);
        assert_eq!(sign("2001-08-22"), ZodiacSign::Leo);
        assert_eq!(sign("2001-12-21"), ZodiacSign::Sagittarius);
        assert_eq!(sign("2001-12-31"), ZodiacSign::Capricorn);
        assert_eq!(sign("2001-01-01"), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_unpadded_month_and_day() {
        assert_eq!(sign("1990-7-3"), ZodiacSign::Cancer);
        assert_eq!(sign("0001-07-23"), ZodiacSign::Leo);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(sign("2024-02-29"), ZodiacSign::Pisces);
    }

    #[test]
    fn test_every_day_of_leap_year_maps_to_a_sign() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let mut seen = std::collections::HashSet::new();

        while date <= end {
            let formatted = date.format(BIRTH_DATE_FORMAT).to_string();
            let resolved = resolve_sign(&formatted).unwrap();
            assert!(ZodiacSign::ALL.contains(&resolved));
            seen.insert(resolved);
            date = date.succ_opt().unwrap();
        }

        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_invalid_dates() {
        let inputs = [
            "2024-13-01",
            "not-a-date",
            "2023-02-29",
            "21/07/1990",
            "",
            "0000-07-23",
            "+1990-07-23",
            "-0001-07-23",
            " 1990-07-23",
            "1990-07-23 ",
            "1990-07- 3",
            "90-07-23",
        ];

        for input in inputs {
            let err = resolve_sign(input).unwrap_err();
            assert_eq!(err, DomainError::InvalidInput(INVALID_BIRTH_DATE.to_string()));
            assert_eq!(err.to_string(), "Invalid birth_date format. Use YYYY-MM-DD");
        }
    }

    #[test]
    fn test_display_matches_serialized_label() {
        for sign in ZodiacSign::ALL {
            let json = serde_json::to_value(sign).unwrap();
            assert_eq!(json, sign.to_string());
        }
    }
}
