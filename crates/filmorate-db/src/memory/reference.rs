//! In-memory GenreRepository and MpaRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::instrument;

use filmorate_core::entities::{Genre, MpaRating};
use filmorate_core::traits::{GenreRepository, MpaRepository, RepoResult};
use filmorate_core::value_objects::{GenreId, MpaId};

use super::MemoryStore;

/// In-memory implementation of GenreRepository
#[derive(Debug, Clone)]
pub struct MemoryGenreRepository {
    store: MemoryStore,
}

impl MemoryGenreRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GenreRepository for MemoryGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GenreId) -> RepoResult<Option<Genre>> {
        Ok(self.store.tables.read().genres.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Genre>> {
        Ok(self.store.tables.read().genres.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_many(&self, ids: &BTreeSet<GenreId>) -> RepoResult<Vec<Genre>> {
        let tables = self.store.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.genres.get(id).cloned())
            .collect())
    }
}

/// In-memory implementation of MpaRepository
#[derive(Debug, Clone)]
pub struct MemoryMpaRepository {
    store: MemoryStore,
}

impl MemoryMpaRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MpaRepository for MemoryMpaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MpaId) -> RepoResult<Option<MpaRating>> {
        Ok(self.store.tables.read().mpa.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MpaRating>> {
        Ok(self.store.tables.read().mpa.values().cloned().collect())
    }
}
