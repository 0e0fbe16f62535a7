//! PostgreSQL implementation of FilmRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use filmorate_core::entities::{Film, FilmDraft};
use filmorate_core::error::DomainError;
use filmorate_core::popularity::PopularCount;
use filmorate_core::traits::{FilmRepository, RepoResult};
use filmorate_core::value_objects::FilmId;

use crate::mappers::{assemble_films, FilmInsert};
use crate::models::{FilmGenreModel, FilmModel, LikeModel};

use super::error::{film_not_found, map_db_error};

const FILM_COLUMNS: &str = r"
    f.id, f.name, f.description, f.release_date, f.duration,
    f.mpa_id, m.name AS mpa_name
";

/// PostgreSQL implementation of FilmRepository
#[derive(Clone)]
pub struct PgFilmRepository {
    pool: PgPool,
}

impl PgFilmRepository {
    /// Create a new PgFilmRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load genres and likes for `rows` and build the entities in row order
    async fn hydrate(&self, rows: Vec<FilmModel>) -> RepoResult<Vec<Film>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let genres = sqlx::query_as::<_, FilmGenreModel>(
            r"
            SELECT fg.film_id, fg.genre_id, g.name AS genre_name
            FROM film_genres fg
            JOIN genres g ON g.id = fg.genre_id
            WHERE fg.film_id = ANY($1)
            ORDER BY fg.film_id, fg.genre_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let likes = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT film_id, user_id
            FROM likes
            WHERE film_id = ANY($1)
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(assemble_films(rows, genres, likes))
    }

    /// Re-read a film that was just written
    async fn reload(&self, id: FilmId) -> RepoResult<Film> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::InternalError(format!("film {id} vanished after write"))
        })
    }

    /// Replace the genre set of `film_id` inside an open transaction
    async fn replace_genres(
        tx: &mut Transaction<'_, Postgres>,
        film_id: i64,
        genre_ids: &[i64],
    ) -> RepoResult<()> {
        sqlx::query("DELETE FROM film_genres WHERE film_id = $1")
            .bind(film_id)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        if !genre_ids.is_empty() {
            sqlx::query(
                r"
                INSERT INTO film_genres (film_id, genre_id)
                SELECT $1, UNNEST($2::BIGINT[])
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(film_id)
            .bind(genre_ids)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl FilmRepository for PgFilmRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: FilmId) -> RepoResult<Option<Film>> {
        let row = sqlx::query_as::<_, FilmModel>(&format!(
            r"
            SELECT {FILM_COLUMNS}
            FROM films f
            JOIN mpa_ratings m ON m.id = f.mpa_id
            WHERE f.id = $1
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Film>> {
        let rows = sqlx::query_as::<_, FilmModel>(&format!(
            r"
            SELECT {FILM_COLUMNS}
            FROM films f
            JOIN mpa_ratings m ON m.id = f.mpa_id
            ORDER BY f.id
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(rows).await
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: FilmId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM films WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &FilmDraft) -> RepoResult<Film> {
        let insert = FilmInsert::new(draft);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO films (name, description, release_date, duration, mpa_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(insert.name)
        .bind(insert.description)
        .bind(insert.release_date)
        .bind(insert.duration)
        .bind(insert.mpa_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::replace_genres(&mut tx, id, &insert.genre_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        self.reload(FilmId::new(id)).await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn update(&self, id: FilmId, draft: &FilmDraft) -> RepoResult<Film> {
        let insert = FilmInsert::new(draft);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE films
            SET name = $2, description = $3, release_date = $4, duration = $5, mpa_id = $6
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(insert.name)
        .bind(insert.description)
        .bind(insert.release_date)
        .bind(insert.duration)
        .bind(insert.mpa_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Dropping the transaction rolls it back
        if result.rows_affected() == 0 {
            return Err(film_not_found(id));
        }

        Self::replace_genres(&mut tx, id.into_inner(), &insert.genre_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        self.reload(id).await
    }

    #[instrument(skip(self))]
    async fn find_popular(&self, count: PopularCount) -> RepoResult<Vec<Film>> {
        let rows = sqlx::query_as::<_, FilmModel>(&format!(
            r"
            SELECT {FILM_COLUMNS}
            FROM films f
            JOIN mpa_ratings m ON m.id = f.mpa_id
            LEFT JOIN likes l ON l.film_id = f.id
            GROUP BY f.id, m.id
            ORDER BY COUNT(l.user_id) DESC, f.id ASC
            LIMIT $1
            "
        ))
        .bind(count.as_limit())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(rows).await
    }
}
