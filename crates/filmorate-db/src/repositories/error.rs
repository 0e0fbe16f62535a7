//! Error handling utilities for repositories

use filmorate_core::entities::Like;
use filmorate_core::error::DomainError;
use filmorate_core::value_objects::{FilmId, FriendPair, UserId};
use sqlx::Error as SqlxError;

/// Foreign key from `likes.user_id` to `users`, named in `schema.sql`
pub const LIKES_USER_FK: &str = "likes_user_id_fkey";

/// Foreign key from `friendships.user_high` to `users`, named in `schema.sql`
pub const FRIENDSHIPS_HIGH_FK: &str = "friendships_user_high_fkey";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and return the appropriate error or fallback
///
/// Edge tables (likes, friendships) reject rows pointing at missing entities
/// this way. `on_missing` receives the name of the violated constraint.
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Which side of a like is missing, judged by the violated constraint
pub fn missing_like_target(like: Like, constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(LIKES_USER_FK) => user_not_found(like.user_id),
        _ => film_not_found(like.film_id),
    }
}

/// Which end of a friendship is missing, judged by the violated constraint
pub fn missing_friend(pair: FriendPair, constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(FRIENDSHIPS_HIGH_FK) => user_not_found(pair.high()),
        _ => user_not_found(pair.low()),
    }
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "film not found" error
pub fn film_not_found(id: FilmId) -> DomainError {
    DomainError::FilmNotFound(id)
}
