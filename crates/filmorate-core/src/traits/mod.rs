//! Ports implemented by the storage layer

mod repositories;

pub use repositories::{
    FilmRepository, FriendRepository, GenreRepository, LikeRepository, MpaRepository,
    RepoResult, UserRepository,
};
