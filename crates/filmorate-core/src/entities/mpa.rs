//! MPA rating - read-only content rating, exactly one per film

use crate::value_objects::MpaId;

/// Ratings seeded into every store, keyed by id
pub const DEFAULT_MPA_RATINGS: [(i64, &str); 5] = [
    (1, "G"),
    (2, "PG"),
    (3, "PG-13"),
    (4, "R"),
    (5, "NC-17"),
];

/// MPA rating reference entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MpaRating {
    pub id: MpaId,
    pub name: String,
}

impl MpaRating {
    pub fn new(id: MpaId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The seeded rating list
    pub fn defaults() -> Vec<Self> {
        DEFAULT_MPA_RATINGS
            .iter()
            .map(|&(id, name)| Self::new(MpaId::new(id), name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ratings = MpaRating::defaults();
        assert_eq!(ratings.len(), 5);
        assert_eq!(ratings[2], MpaRating::new(MpaId::new(3), "PG-13"));
    }
}
