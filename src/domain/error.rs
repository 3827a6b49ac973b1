//! Errors raised by the pure domain functions.

/// Message returned when a birth date cannot be parsed as a calendar date.
pub const INVALID_BIRTH_DATE: &str = "Invalid birth_date format. Use YYYY-MM-DD";

/// Failures of domain-level computations.
///
/// Lookup-table misses never fail; they fall back to default values.
/// The only failure mode is malformed caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_birth_date() -> Self {
        Self::InvalidInput(INVALID_BIRTH_DATE.to_string())
    }
}
