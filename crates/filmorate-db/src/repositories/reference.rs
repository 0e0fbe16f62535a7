//! PostgreSQL implementations of GenreRepository and MpaRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmorate_core::entities::{Genre, MpaRating};
use filmorate_core::traits::{GenreRepository, MpaRepository, RepoResult};
use filmorate_core::value_objects::{GenreId, MpaId};

use crate::models::{GenreModel, MpaModel};

use super::error::map_db_error;

/// PostgreSQL implementation of GenreRepository
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    /// Create a new PgGenreRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GenreId) -> RepoResult<Option<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Genre>> {
        let results = sqlx::query_as::<_, GenreModel>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_many(&self, ids: &BTreeSet<GenreId>) -> RepoResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, GenreModel>(
            "SELECT id, name FROM genres WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Genre::from).collect())
    }
}

/// PostgreSQL implementation of MpaRepository
#[derive(Clone)]
pub struct PgMpaRepository {
    pool: PgPool,
}

impl PgMpaRepository {
    /// Create a new PgMpaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MpaRepository for PgMpaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MpaId) -> RepoResult<Option<MpaRating>> {
        let result =
            sqlx::query_as::<_, MpaModel>("SELECT id, name FROM mpa_ratings WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(MpaRating::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MpaRating>> {
        let results =
            sqlx::query_as::<_, MpaModel>("SELECT id, name FROM mpa_ratings ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(results.into_iter().map(MpaRating::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGenreRepository>();
        assert_send_sync::<PgMpaRepository>();
    }
}
