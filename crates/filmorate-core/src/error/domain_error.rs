//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::{FilmId, GenreId, MpaId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Film not found: {0}")]
    FilmNotFound(FilmId),

    #[error("Genre not found: {0}")]
    GenreNotFound(GenreId),

    #[error("MPA rating not found: {0}")]
    MpaNotFound(MpaId),

    #[error("User {user_id} has not liked film {film_id}")]
    LikeNotFound { film_id: FilmId, user_id: UserId },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("User {0} cannot befriend themselves")]
    SelfFriendship(UserId),

    #[error("User {user_id} already liked film {film_id}")]
    AlreadyLiked { film_id: FilmId, user_id: UserId },

    #[error("Popular film count must be positive, got {0}")]
    InvalidPopularCount(i64),

    #[error("Release date {0} is before 1895-12-28")]
    ReleaseDateTooEarly(NaiveDate),

    #[error("Birthday {0} is in the future")]
    BirthdayInFuture(NaiveDate),

    #[error("Invalid login: {0:?} must be non-empty and contain no whitespace")]
    InvalidLogin(String),

    #[error("Film name must not be blank")]
    BlankFilmName,

    #[error("Description too long: max {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("Duration must be positive, got {0}")]
    NonPositiveDuration(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::FilmNotFound(_) => "UNKNOWN_FILM",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::MpaNotFound(_) => "UNKNOWN_MPA",
            Self::LikeNotFound { .. } => "UNKNOWN_LIKE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfFriendship(_) => "SELF_FRIENDSHIP",
            Self::AlreadyLiked { .. } => "ALREADY_LIKED",
            Self::InvalidPopularCount(_) => "INVALID_POPULAR_COUNT",
            Self::ReleaseDateTooEarly(_) => "RELEASE_DATE_TOO_EARLY",
            Self::BirthdayInFuture(_) => "BIRTHDAY_IN_FUTURE",
            Self::InvalidLogin(_) => "INVALID_LOGIN",
            Self::BlankFilmName => "BLANK_FILM_NAME",
            Self::DescriptionTooLong { .. } => "DESCRIPTION_TOO_LONG",
            Self::NonPositiveDuration(_) => "NON_POSITIVE_DURATION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::FilmNotFound(_)
                | Self::GenreNotFound(_)
                | Self::MpaNotFound(_)
                | Self::LikeNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::SelfFriendship(_)
                | Self::AlreadyLiked { .. }
                | Self::InvalidPopularCount(_)
                | Self::ReleaseDateTooEarly(_)
                | Self::BirthdayInFuture(_)
                | Self::InvalidLogin(_)
                | Self::BlankFilmName
                | Self::DescriptionTooLong { .. }
                | Self::NonPositiveDuration(_)
        )
    }
}
