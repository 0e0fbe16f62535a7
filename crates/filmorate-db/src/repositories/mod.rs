//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in filmorate-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod film;
mod friend;
mod like;
mod reference;
mod user;

pub use film::PgFilmRepository;
pub use friend::PgFriendRepository;
pub use like::PgLikeRepository;
pub use reference::{PgGenreRepository, PgMpaRepository};
pub use user::PgUserRepository;
