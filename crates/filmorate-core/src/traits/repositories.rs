//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the storage layer provides
//! the implementation (in-memory or PostgreSQL).

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::entities::{Film, FilmDraft, Genre, Like, MpaRating, User, UserDraft};
use crate::error::DomainError;
use crate::popularity::PopularCount;
use crate::value_objects::{FilmId, FriendPair, GenreId, MpaId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, with its friend ids populated
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// List all users ordered by id
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Load the users whose ids are in `ids`, ordered by id
    ///
    /// Ids with no stored user are skipped.
    async fn find_many(&self, ids: &BTreeSet<UserId>) -> RepoResult<Vec<User>>;

    /// Check if a user exists
    async fn exists(&self, id: UserId) -> RepoResult<bool>;

    /// Store a new user and return it with its assigned id
    async fn create(&self, draft: &UserDraft) -> RepoResult<User>;

    /// Replace the fields of an existing user, keeping its friendships
    ///
    /// Returns `DomainError::UserNotFound` if no such user exists.
    async fn update(&self, id: UserId, draft: &UserDraft) -> RepoResult<User>;
}

// ============================================================================
// Friend Repository
// ============================================================================

#[async_trait]
pub trait FriendRepository: Send + Sync {
    /// Record a friendship edge. Returns false if it already existed.
    async fn add(&self, pair: FriendPair) -> RepoResult<bool>;

    /// Delete a friendship edge. Returns false if there was none.
    async fn remove(&self, pair: FriendPair) -> RepoResult<bool>;

    /// Ids on the other end of every edge touching `user`
    async fn friend_ids(&self, user: UserId) -> RepoResult<BTreeSet<UserId>>;
}

// ============================================================================
// Film Repository
// ============================================================================

#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Find film by ID, with rating, genres and likes populated
    async fn find_by_id(&self, id: FilmId) -> RepoResult<Option<Film>>;

    /// List all films ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Film>>;

    /// Check if a film exists
    async fn exists(&self, id: FilmId) -> RepoResult<bool>;

    /// Store a new film and return it with its assigned id
    ///
    /// The rating and genres referenced by the draft must already exist.
    async fn create(&self, draft: &FilmDraft) -> RepoResult<Film>;

    /// Replace the fields and genres of an existing film, keeping its likes
    ///
    /// Returns `DomainError::FilmNotFound` if no such film exists.
    async fn update(&self, id: FilmId, draft: &FilmDraft) -> RepoResult<Film>;

    /// Most liked films, descending by like count, ties by ascending id
    async fn find_popular(&self, count: PopularCount) -> RepoResult<Vec<Film>>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like. Returns false if the user already liked the film.
    async fn add(&self, like: Like) -> RepoResult<bool>;

    /// Delete a like. Returns false if there was none.
    async fn remove(&self, like: Like) -> RepoResult<bool>;
}

// ============================================================================
// Genre Repository
// ============================================================================

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find genre by ID
    async fn find_by_id(&self, id: GenreId) -> RepoResult<Option<Genre>>;

    /// List all genres ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Genre>>;

    /// Load the genres whose ids are in `ids`, ordered by id
    async fn find_many(&self, ids: &BTreeSet<GenreId>) -> RepoResult<Vec<Genre>>;
}

// ============================================================================
// MPA Repository
// ============================================================================

#[async_trait]
pub trait MpaRepository: Send + Sync {
    /// Find rating by ID
    async fn find_by_id(&self, id: MpaId) -> RepoResult<Option<MpaRating>>;

    /// List all ratings ordered by id
    async fn find_all(&self) -> RepoResult<Vec<MpaRating>>;
}
