//! Genre - read-only classification tag for films

use crate::value_objects::GenreId;

/// Genres seeded into every store, keyed by id
pub const DEFAULT_GENRES: [(i64, &str); 6] = [
    (1, "Comedy"),
    (2, "Drama"),
    (3, "Animation"),
    (4, "Thriller"),
    (5, "Documentary"),
    (6, "Action"),
];

/// Genre reference entity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The seeded genre list
    pub fn defaults() -> Vec<Self> {
        DEFAULT_GENRES
            .iter()
            .map(|&(id, name)| Self::new(GenreId::new(id), name))
            .collect()
    }
}
