//! PostgreSQL implementation of UserRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmorate_core::entities::{User, UserDraft};
use filmorate_core::friendship::friends_of;
use filmorate_core::traits::{RepoResult, UserRepository};
use filmorate_core::value_objects::{FriendPair, UserId};

use crate::mappers::user_with_friends;
use crate::models::{FriendshipModel, UserModel};

use super::error::{map_db_error, user_not_found};
use super::friend::load_friend_ids;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach friend ids to a batch of user rows using one edge query
    async fn with_friends(&self, models: Vec<UserModel>) -> RepoResult<Vec<User>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let edges = sqlx::query_as::<_, FriendshipModel>(
            r"
            SELECT user_low, user_high
            FROM friendships
            WHERE user_low = ANY($1) OR user_high = ANY($1)
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(FriendPair::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(models
            .into_iter()
            .map(|model| {
                let friends = friends_of(&edges, UserId::new(model.id));
                user_with_friends(model, friends)
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, login, name, birthday
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let friends = load_friend_ids(&self.pool, id).await?;
                Ok(Some(user_with_friends(model, friends)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, login, name, birthday
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_friends(models).await
    }

    #[instrument(skip(self))]
    async fn find_many(&self, ids: &BTreeSet<UserId>) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, login, name, birthday
            FROM users
            WHERE id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_friends(models).await
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, draft), fields(login = %draft.login))]
    async fn create(&self, draft: &UserDraft) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, login, name, birthday)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, login, name, birthday
            ",
        )
        .bind(&draft.email)
        .bind(&draft.login)
        .bind(&draft.name)
        .bind(draft.birthday)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(user_with_friends(model, BTreeSet::new()))
    }

    #[instrument(skip(self, draft), fields(login = %draft.login))]
    async fn update(&self, id: UserId, draft: &UserDraft) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET email = $2, login = $3, name = $4, birthday = $5
            WHERE id = $1
            RETURNING id, email, login, name, birthday
            ",
        )
        .bind(id.into_inner())
        .bind(&draft.email)
        .bind(&draft.login)
        .bind(&draft.name)
        .bind(draft.birthday)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        let friends = load_friend_ids(&self.pool, id).await?;
        Ok(user_with_friends(model, friends))
    }
}
