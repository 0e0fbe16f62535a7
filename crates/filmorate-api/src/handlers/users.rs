//! User handlers
//!
//! Endpoints for user registration, profile updates and friendships.

use axum::{extract::State, Json};
use filmorate_service::dto::{UserRequest, UserResponse};
use filmorate_service::{FriendService, UserService};

use crate::extractors::{CommonFriendsPath, FriendPath, IdPath, UserPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users().await?))
}

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Created(Json(user)))
}

/// Update a user; the id travels in the body
///
/// PUT /users
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update_user(request).await?))
}

/// Get user by ID
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_user(path.id).await?))
}

/// Add a friend
///
/// PUT /users/{id}/friends/{friendId}
pub async fn add_friend(
    State(state): State<AppState>,
    IdPath(path): IdPath<FriendPath>,
) -> ApiResult<()> {
    let service = FriendService::new(state.service_context());
    service.add_friend(path.id, path.friend_id).await?;
    Ok(())
}

/// Remove a friend
///
/// DELETE /users/{id}/friends/{friendId}
pub async fn remove_friend(
    State(state): State<AppState>,
    IdPath(path): IdPath<FriendPath>,
) -> ApiResult<()> {
    let service = FriendService::new(state.service_context());
    service.remove_friend(path.id, path.friend_id).await?;
    Ok(())
}

/// List a user's friends
///
/// GET /users/{id}/friends
pub async fn get_friends(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserPath>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = FriendService::new(state.service_context());
    Ok(Json(service.get_friends(path.id).await?))
}

/// List friends shared by two users
///
/// GET /users/{id}/friends/common/{otherId}
pub async fn get_common_friends(
    State(state): State<AppState>,
    IdPath(path): IdPath<CommonFriendsPath>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = FriendService::new(state.service_context());
    Ok(Json(service.get_common_friends(path.id, path.other_id).await?))
}
