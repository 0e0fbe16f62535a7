//! In-memory FilmRepository and LikeRepository

use async_trait::async_trait;
use tracing::instrument;

use filmorate_core::entities::{Film, FilmDraft, Like};
use filmorate_core::error::DomainError;
use filmorate_core::popularity::{rank_by_likes, PopularCount};
use filmorate_core::traits::{FilmRepository, LikeRepository, RepoResult};
use filmorate_core::value_objects::FilmId;

use super::{FilmRecord, MemoryStore};

/// In-memory implementation of FilmRepository
#[derive(Debug, Clone)]
pub struct MemoryFilmRepository {
    store: MemoryStore,
}

impl MemoryFilmRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FilmRepository for MemoryFilmRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: FilmId) -> RepoResult<Option<Film>> {
        self.store.tables.read().film(id)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Film>> {
        let tables = self.store.tables.read();
        tables
            .films
            .iter()
            .map(|(id, record)| tables.assemble(*id, record))
            .collect()
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: FilmId) -> RepoResult<bool> {
        Ok(self.store.tables.read().films.contains_key(&id))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &FilmDraft) -> RepoResult<Film> {
        let mut tables = self.store.tables.write();
        tables.check_references(draft)?;

        let id: FilmId = tables.film_ids.next_id();
        let record = FilmRecord::from(draft);
        let film = tables.assemble(id, &record)?;
        tables.films.insert(id, record);
        Ok(film)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn update(&self, id: FilmId, draft: &FilmDraft) -> RepoResult<Film> {
        let mut tables = self.store.tables.write();
        if !tables.films.contains_key(&id) {
            return Err(DomainError::FilmNotFound(id));
        }
        tables.check_references(draft)?;

        let record = FilmRecord::from(draft);
        let film = tables.assemble(id, &record)?;
        tables.films.insert(id, record);
        Ok(film)
    }

    #[instrument(skip(self))]
    async fn find_popular(&self, count: PopularCount) -> RepoResult<Vec<Film>> {
        let films = self.find_all().await?;
        Ok(rank_by_likes(films, count))
    }
}

/// In-memory implementation of LikeRepository
///
/// Likes are stored as given; callers check that the film and user exist.
#[derive(Debug, Clone)]
pub struct MemoryLikeRepository {
    store: MemoryStore,
}

impl MemoryLikeRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LikeRepository for MemoryLikeRepository {
    #[instrument(skip(self))]
    async fn add(&self, like: Like) -> RepoResult<bool> {
        Ok(self.store.tables.write().likes.insert(like))
    }

    #[instrument(skip(self))]
    async fn remove(&self, like: Like) -> RepoResult<bool> {
        Ok(self.store.tables.write().likes.remove(&like))
    }
}
