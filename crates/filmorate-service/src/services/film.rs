//! Film service
//!
//! Handles film creation, replacement and lookup. Rating and genre
//! references are checked here so unknown ids surface as 404 on both
//! storage backends.

use tracing::{info, instrument};

use filmorate_core::entities::FilmDraft;
use filmorate_core::FilmId;

use crate::dto::{FilmRequest, FilmResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Film service
pub struct FilmService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FilmService<'a> {
    /// Create a new FilmService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all films ordered by id
    #[instrument(skip(self))]
    pub async fn list_films(&self) -> ServiceResult<Vec<FilmResponse>> {
        let films = self.ctx.film_repo().find_all().await?;
        Ok(films.iter().map(FilmResponse::from).collect())
    }

    /// Get film by ID
    #[instrument(skip(self))]
    pub async fn get_film(&self, film_id: FilmId) -> ServiceResult<FilmResponse> {
        let film = self
            .ctx
            .film_repo()
            .find_by_id(film_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Film", film_id))?;

        Ok(FilmResponse::from(&film))
    }

    /// Add a film to the catalog
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_film(&self, request: FilmRequest) -> ServiceResult<FilmResponse> {
        let draft = FilmDraft::from(request);
        self.check_draft(&draft).await?;

        let film = self.ctx.film_repo().create(&draft).await?;
        info!(film_id = %film.id, name = %film.name, "Film created");

        Ok(FilmResponse::from(&film))
    }

    /// Replace an existing film's fields and genres, keeping its likes
    #[instrument(skip(self, request), fields(film_id = ?request.id))]
    pub async fn update_film(&self, request: FilmRequest) -> ServiceResult<FilmResponse> {
        let film_id = request
            .id
            .map(FilmId::new)
            .ok_or_else(|| ServiceError::validation("Film id is required for update"))?;

        let draft = FilmDraft::from(request);
        self.check_draft(&draft).await?;

        let film = self.ctx.film_repo().update(film_id, &draft).await?;
        info!(film_id = %film_id, "Film updated");

        Ok(FilmResponse::from(&film))
    }

    /// Fail with 404 unless the film exists
    pub(crate) async fn ensure_exists(&self, film_id: FilmId) -> ServiceResult<()> {
        if self.ctx.film_repo().exists(film_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Film", film_id))
        }
    }

    /// Field rules first, then the rating and genre references
    async fn check_draft(&self, draft: &FilmDraft) -> ServiceResult<()> {
        draft.validate()?;

        if self.ctx.mpa_repo().find_by_id(draft.mpa_id).await?.is_none() {
            return Err(ServiceError::not_found("MPA rating", draft.mpa_id));
        }

        if !draft.genre_ids.is_empty() {
            let found = self.ctx.genre_repo().find_many(&draft.genre_ids).await?;
            if let Some(missing) = draft
                .genre_ids
                .iter()
                .find(|id| !found.iter().any(|genre| genre.id == **id))
            {
                return Err(ServiceError::not_found("Genre", missing));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use filmorate_db::MemoryStore;

    use super::*;
    use crate::dto::{GenreRef, MpaRef};

    fn request(name: &str) -> FilmRequest {
        FilmRequest {
            id: None,
            name: name.to_string(),
            description: Some("adipisicing".to_string()),
            release_date: NaiveDate::from_ymd_opt(1967, 3, 25).unwrap(),
            duration: 100,
            mpa: MpaRef { id: 1 },
            genres: None,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_rating_and_genres() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = FilmService::new(&ctx);

        let mut film = request("nisi eiusmod");
        film.genres = Some(vec![GenreRef { id: 2 }, GenreRef { id: 1 }, GenreRef { id: 2 }]);
        let created = service.create_film(film).await.unwrap();

        assert_eq!(created.id, FilmId::new(1));
        assert_eq!(created.mpa.name, "G");
        let genres: Vec<&str> = created.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(genres, vec!["Comedy", "Drama"]);
        assert!(created.likes.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = FilmService::new(&ctx);

        let mut early = request("early");
        early.release_date = NaiveDate::from_ymd_opt(1890, 3, 25).unwrap();
        assert_eq!(service.create_film(early).await.unwrap_err().status_code(), 400);

        let mut boundary = request("boundary");
        boundary.release_date = NaiveDate::from_ymd_opt(1895, 12, 28).unwrap();
        assert!(service.create_film(boundary).await.is_ok());

        let mut negative = request("negative");
        negative.duration = -200;
        assert_eq!(service.create_film(negative).await.unwrap_err().status_code(), 400);

        let mut long = request("long");
        long.description = Some("a".repeat(201));
        assert_eq!(service.create_film(long).await.unwrap_err().status_code(), 400);
    }

    #[tokio::test]
    async fn test_unknown_references_are_not_found() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = FilmService::new(&ctx);

        let mut film = request("bad mpa");
        film.mpa = MpaRef { id: 99 };
        assert!(service.create_film(film).await.unwrap_err().is_not_found());

        let mut film = request("bad genre");
        film.genres = Some(vec![GenreRef { id: 1 }, GenreRef { id: 42 }]);
        assert!(service.create_film(film).await.unwrap_err().is_not_found());

        assert!(service.list_films().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_genres() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        let service = FilmService::new(&ctx);

        let mut film = request("Film");
        film.genres = Some(vec![GenreRef { id: 1 }]);
        service.create_film(film).await.unwrap();

        let mut update = request("Film Updated");
        update.id = Some(1);
        update.mpa = MpaRef { id: 5 };
        update.genres = Some(vec![]);
        let updated = service.update_film(update).await.unwrap();

        assert_eq!(updated.name, "Film Updated");
        assert_eq!(updated.mpa.name, "NC-17");
        assert!(updated.genres.is_empty());

        let mut unknown = request("Missing");
        unknown.id = Some(9999);
        assert!(service.update_film(unknown).await.unwrap_err().is_not_found());

        let err = service.update_film(request("No id")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
