//! Film database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Film row joined with its MPA rating name
#[derive(Debug, Clone, FromRow)]
pub struct FilmModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i64,
    pub mpa_name: String,
}

/// Row of film_genres joined with the genre name
#[derive(Debug, Clone, FromRow)]
pub struct FilmGenreModel {
    pub film_id: i64,
    pub genre_id: i64,
    pub genre_name: String,
}

/// Database model for likes table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct LikeModel {
    pub film_id: i64,
    pub user_id: i64,
}
