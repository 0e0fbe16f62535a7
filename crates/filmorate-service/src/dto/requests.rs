//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field-level rules live here; rules needing a reference date or the store
//! are checked by the domain drafts and services.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create or update user request
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub id: Option<i64>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Login must not be empty"))]
    pub login: String,

    /// Display name; blank or absent falls back to the login
    pub name: Option<String>,

    pub birthday: Option<NaiveDate>,
}

// ============================================================================
// Film Requests
// ============================================================================

/// Reference to an MPA rating by id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MpaRef {
    pub id: i64,
}

/// Reference to a genre by id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GenreRef {
    pub id: i64,
}

/// Create or update film request
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilmRequest {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Film name must not be empty"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,

    pub release_date: NaiveDate,

    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i32,

    pub mpa: MpaRef,

    #[serde(default)]
    pub genres: Option<Vec<GenreRef>>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters of the popular films listing
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}
