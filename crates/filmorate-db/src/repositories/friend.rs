//! PostgreSQL implementation of FriendRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmorate_core::error::DomainError;
use filmorate_core::traits::{FriendRepository, RepoResult};
use filmorate_core::value_objects::{FriendPair, UserId};

use super::error::{map_db_error, map_foreign_key_violation, missing_friend};

/// PostgreSQL implementation of FriendRepository
#[derive(Clone)]
pub struct PgFriendRepository {
    pool: PgPool,
}

impl PgFriendRepository {
    /// Create a new PgFriendRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Ids on the other end of every edge touching `user`
pub(crate) async fn load_friend_ids(pool: &PgPool, user: UserId) -> Result<BTreeSet<UserId>, DomainError> {
    let ids = sqlx::query_scalar::<_, i64>(
        r"
        SELECT CASE WHEN user_low = $1 THEN user_high ELSE user_low END
        FROM friendships
        WHERE user_low = $1 OR user_high = $1
        ",
    )
    .bind(user.into_inner())
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    Ok(ids.into_iter().map(UserId::new).collect())
}

#[async_trait]
impl FriendRepository for PgFriendRepository {
    #[instrument(skip(self))]
    async fn add(&self, pair: FriendPair) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO friendships (user_low, user_high)
            VALUES ($1, $2)
            ON CONFLICT (user_low, user_high) DO NOTHING
            ",
        )
        .bind(pair.low().into_inner())
        .bind(pair.high().into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| missing_friend(pair, constraint))
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, pair: FriendPair) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM friendships WHERE user_low = $1 AND user_high = $2
            ",
        )
        .bind(pair.low().into_inner())
        .bind(pair.high().into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn friend_ids(&self, user: UserId) -> RepoResult<BTreeSet<UserId>> {
        load_friend_ids(&self.pool, user).await
    }
}
