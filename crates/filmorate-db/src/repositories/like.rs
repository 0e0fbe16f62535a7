//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmorate_core::entities::Like;
use filmorate_core::traits::{LikeRepository, RepoResult};
use super::error::{map_db_error, map_foreign_key_violation, missing_like_target};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn add(&self, like: Like) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO likes (film_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (film_id, user_id) DO NOTHING
            ",
        )
        .bind(like.film_id.into_inner())
        .bind(like.user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| missing_like_target(like, constraint))
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, like: Like) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE film_id = $1 AND user_id = $2
            ",
        )
        .bind(like.film_id.into_inner())
        .bind(like.user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLikeRepository>();
    }
}
