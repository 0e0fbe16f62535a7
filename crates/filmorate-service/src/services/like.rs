//! Like service
//!
//! Handles film likes and the popularity ranking built on them.

use tracing::{info, instrument};

use filmorate_core::{DomainError, FilmId, Like, PopularCount, UserId};

use crate::dto::FilmResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::film::FilmService;
use super::user::UserService;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that a user likes a film
    ///
    /// A user can like a film at most once.
    #[instrument(skip(self))]
    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> ServiceResult<()> {
        FilmService::new(self.ctx).ensure_exists(film_id).await?;
        UserService::new(self.ctx).ensure_exists(user_id).await?;

        if !self.ctx.like_repo().add(Like::new(film_id, user_id)).await? {
            return Err(DomainError::AlreadyLiked { film_id, user_id }.into());
        }

        info!(film_id = %film_id, user_id = %user_id, "Like added");
        Ok(())
    }

    /// Withdraw a user's like from a film
    #[instrument(skip(self))]
    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> ServiceResult<()> {
        FilmService::new(self.ctx).ensure_exists(film_id).await?;
        UserService::new(self.ctx).ensure_exists(user_id).await?;

        if !self.ctx.like_repo().remove(Like::new(film_id, user_id)).await? {
            return Err(DomainError::LikeNotFound { film_id, user_id }.into());
        }

        info!(film_id = %film_id, user_id = %user_id, "Like removed");
        Ok(())
    }

    /// Most liked films
    ///
    /// `count` defaults to 10 and must be positive. Films without likes
    /// still fill the list, after every liked film.
    #[instrument(skip(self))]
    pub async fn popular(&self, count: Option<i64>) -> ServiceResult<Vec<FilmResponse>> {
        let count = PopularCount::from_param(count)?;
        let films = self.ctx.film_repo().find_popular(count).await?;
        Ok(films.iter().map(FilmResponse::from).collect())
    }
}
