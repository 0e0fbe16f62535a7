//! Path parameter extractors
//!
//! Typed extraction of entity ids from path parameters. A segment that is not
//! an integer is rejected with 400 rather than axum's plain-text rejection.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use filmorate_core::{FilmId, GenreId, MpaId, UserId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Extract path parameters, mapping rejections to `ApiError`
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// `/users/:id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UserPath {
    pub id: UserId,
}

/// `/users/:id/friends/:friend_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FriendPath {
    pub id: UserId,
    pub friend_id: UserId,
}

/// `/users/:id/friends/common/:other_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CommonFriendsPath {
    pub id: UserId,
    pub other_id: UserId,
}

/// `/films/:id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FilmPath {
    pub id: FilmId,
}

/// `/films/:id/like/:user_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LikePath {
    pub id: FilmId,
    pub user_id: UserId,
}

/// `/genres/:id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GenrePath {
    pub id: GenreId,
}

/// `/mpa/:id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MpaPath {
    pub id: MpaId,
}
