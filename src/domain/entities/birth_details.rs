//! Birth details entity supplied by callers.

/// Birth information used to derive an insight.
///
/// `birth_time` is carried but unused by any computation, and it is not part
/// of the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDetails {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
}

impl BirthDetails {
    /// Creates a new BirthDetails instance.
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        birth_place: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            birth_place: birth_place.into(),
        }
    }
}
