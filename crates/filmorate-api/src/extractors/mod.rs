//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, typed path ids and query strings.

mod path;
mod query;
mod validated;

pub use path::{
    CommonFriendsPath, FilmPath, FriendPath, GenrePath, IdPath, LikePath, MpaPath, UserPath,
};
pub use query::ApiQuery;
pub use validated::ValidatedJson;
