//! Reference data services
//!
//! Read-only lookups of genres and MPA ratings.

use tracing::instrument;

use filmorate_core::{GenreId, MpaId};

use crate::dto::{GenreResponse, MpaResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Genre service
pub struct GenreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenreService<'a> {
    /// Create a new GenreService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all genres ordered by id
    #[instrument(skip(self))]
    pub async fn list_genres(&self) -> ServiceResult<Vec<GenreResponse>> {
        let genres = self.ctx.genre_repo().find_all().await?;
        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    /// Get genre by ID
    #[instrument(skip(self))]
    pub async fn get_genre(&self, genre_id: GenreId) -> ServiceResult<GenreResponse> {
        self.ctx
            .genre_repo()
            .find_by_id(genre_id)
            .await?
            .map(GenreResponse::from)
            .ok_or_else(|| ServiceError::not_found("Genre", genre_id))
    }
}

/// MPA rating service
pub struct MpaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MpaService<'a> {
    /// Create a new MpaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all ratings ordered by id
    #[instrument(skip(self))]
    pub async fn list_ratings(&self) -> ServiceResult<Vec<MpaResponse>> {
        let ratings = self.ctx.mpa_repo().find_all().await?;
        Ok(ratings.into_iter().map(MpaResponse::from).collect())
    }

    /// Get rating by ID
    #[instrument(skip(self))]
    pub async fn get_rating(&self, mpa_id: MpaId) -> ServiceResult<MpaResponse> {
        self.ctx
            .mpa_repo()
            .find_by_id(mpa_id)
            .await?
            .map(MpaResponse::from)
            .ok_or_else(|| ServiceError::not_found("MPA rating", mpa_id))
    }
}

#[cfg(test)]
mod tests {
    use filmorate_db::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_seeded_genres() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = GenreService::new(&ctx);

        let genres = service.list_genres().await.unwrap();
        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Comedy", "Drama", "Animation", "Thriller", "Documentary", "Action"]
        );

        assert_eq!(service.get_genre(GenreId::new(4)).await.unwrap().name, "Thriller");
        assert!(service.get_genre(GenreId::new(7)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_seeded_ratings() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = MpaService::new(&ctx);

        let ratings = service.list_ratings().await.unwrap();
        let names: Vec<&str> = ratings.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["G", "PG", "PG-13", "R", "NC-17"]);

        assert_eq!(service.get_rating(MpaId::new(3)).await.unwrap().name, "PG-13");
        assert!(service.get_rating(MpaId::new(0)).await.unwrap_err().is_not_found());
    }
}
