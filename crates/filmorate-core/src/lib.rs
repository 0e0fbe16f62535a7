//! # filmorate-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the friendship and popularity rules.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod friendship;
pub mod popularity;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Film, FilmDraft, Genre, Like, MpaRating, User, UserDraft, CINEMA_BIRTHDAY, DEFAULT_GENRES,
    DEFAULT_MPA_RATINGS, MAX_DESCRIPTION_LENGTH,
};
pub use error::DomainError;
pub use popularity::{PopularCount, DEFAULT_POPULAR_COUNT};
pub use traits::{
    FilmRepository, FriendRepository, GenreRepository, LikeRepository, MpaRepository,
    RepoResult, UserRepository,
};
pub use value_objects::{FilmId, FriendPair, GenreId, IdParseError, IdSequence, MpaId, UserId};
