//! Service context - dependency container for services
//!
//! Holds all repositories and the optional database pool needed by services.

use std::sync::Arc;

use filmorate_core::traits::{
    FilmRepository, FriendRepository, GenreRepository, LikeRepository, MpaRepository,
    UserRepository,
};
use filmorate_db::{
    MemoryStore, PgFilmRepository, PgFriendRepository, PgGenreRepository, PgLikeRepository,
    PgMpaRepository, PgPool, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are trait objects, so the same services run on top of the
/// in-memory store or PostgreSQL.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (absent for the in-memory backend)
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    friend_repo: Arc<dyn FriendRepository>,
    film_repo: Arc<dyn FilmRepository>,
    like_repo: Arc<dyn LikeRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    mpa_repo: Arc<dyn MpaRepository>,
}

impl ServiceContext {
    /// Create a context backed by an in-memory store
    pub fn in_memory(store: &MemoryStore) -> Self {
        Self {
            pool: None,
            user_repo: Arc::new(store.users()),
            friend_repo: Arc::new(store.friends()),
            film_repo: Arc::new(store.films()),
            like_repo: Arc::new(store.likes()),
            genre_repo: Arc::new(store.genres()),
            mpa_repo: Arc::new(store.mpa()),
        }
    }

    /// Create a context backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            friend_repo: Arc::new(PgFriendRepository::new(pool.clone())),
            film_repo: Arc::new(PgFilmRepository::new(pool.clone())),
            like_repo: Arc::new(PgLikeRepository::new(pool.clone())),
            genre_repo: Arc::new(PgGenreRepository::new(pool.clone())),
            mpa_repo: Arc::new(PgMpaRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if this context uses one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Name of the storage backend, for health reporting
    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Check that the store can serve requests
    pub async fn storage_ready(&self) -> bool {
        match &self.pool {
            Some(pool) => filmorate_db::ping(pool).await.is_ok(),
            None => true,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the friendship repository
    pub fn friend_repo(&self) -> &dyn FriendRepository {
        self.friend_repo.as_ref()
    }

    /// Get the film repository
    pub fn film_repo(&self) -> &dyn FilmRepository {
        self.film_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the genre repository
    pub fn genre_repo(&self) -> &dyn GenreRepository {
        self.genre_repo.as_ref()
    }

    /// Get the MPA rating repository
    pub fn mpa_repo(&self) -> &dyn MpaRepository {
        self.mpa_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.backend_name())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    friend_repo: Option<Arc<dyn FriendRepository>>,
    film_repo: Option<Arc<dyn FilmRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    genre_repo: Option<Arc<dyn GenreRepository>>,
    mpa_repo: Option<Arc<dyn MpaRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn friend_repo(mut self, repo: Arc<dyn FriendRepository>) -> Self {
        self.friend_repo = Some(repo);
        self
    }

    pub fn film_repo(mut self, repo: Arc<dyn FilmRepository>) -> Self {
        self.film_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn genre_repo(mut self, repo: Arc<dyn GenreRepository>) -> Self {
        self.genre_repo = Some(repo);
        self
    }

    pub fn mpa_repo(mut self, repo: Arc<dyn MpaRepository>) -> Self {
        self.mpa_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            friend_repo: self
                .friend_repo
                .ok_or_else(|| ServiceError::validation("friend_repo is required"))?,
            film_repo: self
                .film_repo
                .ok_or_else(|| ServiceError::validation("film_repo is required"))?,
            like_repo: self
                .like_repo
                .ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            genre_repo: self
                .genre_repo
                .ok_or_else(|| ServiceError::validation("genre_repo is required"))?,
            mpa_repo: self
                .mpa_repo
                .ok_or_else(|| ServiceError::validation("mpa_repo is required"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_context_is_ready() {
        let ctx = ServiceContext::in_memory(&MemoryStore::new());
        assert_eq!(ctx.backend_name(), "memory");
        assert!(ctx.pool().is_none());
        assert!(ctx.storage_ready().await);
    }

    #[test]
    fn test_builder_requires_repositories() {
        let store = MemoryStore::new();
        let err = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.users()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("friend_repo is required"));

        let ctx = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.users()))
            .friend_repo(Arc::new(store.friends()))
            .film_repo(Arc::new(store.films()))
            .like_repo(Arc::new(store.likes()))
            .genre_repo(Arc::new(store.genres()))
            .mpa_repo(Arc::new(store.mpa()))
            .build()
            .unwrap();
        assert_eq!(ctx.backend_name(), "memory");
    }
}
