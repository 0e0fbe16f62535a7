//! Database models - SQLx-compatible structs for PostgreSQL tables

mod film;
mod reference;
mod user;

pub use film::{FilmGenreModel, FilmModel, LikeModel};
pub use reference::{GenreModel, MpaModel};
pub use user::{FriendshipModel, UserModel};
