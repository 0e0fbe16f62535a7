//! Value objects - immutable types that represent domain concepts

mod friend_pair;
mod ids;

pub use friend_pair::FriendPair;
pub use ids::{FilmId, GenreId, IdParseError, IdSequence, MpaId, UserId};
