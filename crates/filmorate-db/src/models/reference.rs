//! Reference data models (genres, MPA ratings)

use sqlx::FromRow;

/// Database model for genres table
#[derive(Debug, Clone, FromRow)]
pub struct GenreModel {
    pub id: i64,
    pub name: String,
}

/// Database model for mpa_ratings table
#[derive(Debug, Clone, FromRow)]
pub struct MpaModel {
    pub id: i64,
    pub name: String,
}
