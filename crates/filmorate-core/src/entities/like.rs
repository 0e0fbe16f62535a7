//! Like - a user's endorsement of a film

use crate::value_objects::{FilmId, UserId};

/// Like record: `user_id` liked `film_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Like {
    pub film_id: FilmId,
    pub user_id: UserId,
}

impl Like {
    /// Create a new Like
    pub fn new(film_id: FilmId, user_id: UserId) -> Self {
        Self { film_id, user_id }
    }
}
