//! Film entity <-> model mapper

use std::collections::{BTreeMap, BTreeSet};

use filmorate_core::entities::{Film, FilmDraft, Genre, MpaRating};
use filmorate_core::value_objects::{FilmId, GenreId, MpaId, UserId};

use crate::models::{FilmGenreModel, FilmModel, LikeModel};

/// Join film rows with their genre and like rows
///
/// Output keeps the order of `rows`. Genres end up ordered by id.
pub fn assemble_films(
    rows: Vec<FilmModel>,
    genres: Vec<FilmGenreModel>,
    likes: Vec<LikeModel>,
) -> Vec<Film> {
    let mut genres_by_film: BTreeMap<i64, BTreeMap<i64, String>> = BTreeMap::new();
    for row in genres {
        genres_by_film
            .entry(row.film_id)
            .or_default()
            .insert(row.genre_id, row.genre_name);
    }

    let mut likes_by_film: BTreeMap<i64, BTreeSet<UserId>> = BTreeMap::new();
    for row in likes {
        likes_by_film
            .entry(row.film_id)
            .or_default()
            .insert(UserId::new(row.user_id));
    }

    rows.into_iter()
        .map(|row| {
            let genres = genres_by_film
                .remove(&row.id)
                .unwrap_or_default()
                .into_iter()
                .map(|(id, name)| Genre::new(GenreId::new(id), name))
                .collect();
            let likes = likes_by_film.remove(&row.id).unwrap_or_default();

            Film {
                id: FilmId::new(row.id),
                name: row.name,
                description: row.description,
                release_date: row.release_date,
                duration: row.duration,
                mpa: MpaRating::new(MpaId::new(row.mpa_id), row.mpa_name),
                genres,
                likes,
            }
        })
        .collect()
}

/// Film draft values ready for binding
pub struct FilmInsert<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub release_date: chrono::NaiveDate,
    pub duration: i32,
    pub mpa_id: i64,
    pub genre_ids: Vec<i64>,
}

impl<'a> FilmInsert<'a> {
    pub fn new(draft: &'a FilmDraft) -> Self {
        Self {
            name: &draft.name,
            description: draft.description.as_deref(),
            release_date: draft.release_date,
            duration: draft.duration,
            mpa_id: draft.mpa_id.into_inner(),
            genre_ids: draft.genre_ids.iter().map(|id| id.into_inner()).collect(),
        }
    }
}
