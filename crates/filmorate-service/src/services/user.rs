//! User service
//!
//! Handles user creation, replacement and lookup.

use chrono::Utc;
use tracing::{info, instrument};

use filmorate_core::entities::UserDraft;
use filmorate_core::UserId;

use crate::dto::{UserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users ordered by id
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(UserResponse::from(&user))
    }

    /// Register a new user
    ///
    /// Any id in the request is ignored; the store assigns the next one.
    #[instrument(skip(self, request), fields(login = %request.login))]
    pub async fn create_user(&self, request: UserRequest) -> ServiceResult<UserResponse> {
        let draft = UserDraft::from(request);
        draft.validate(Utc::now().date_naive())?;

        let user = self.ctx.user_repo().create(&draft).await?;
        info!(user_id = %user.id, login = %user.login, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Replace an existing user's fields, keeping its friendships
    #[instrument(skip(self, request), fields(user_id = ?request.id))]
    pub async fn update_user(&self, request: UserRequest) -> ServiceResult<UserResponse> {
        let user_id = request
            .id
            .map(UserId::new)
            .ok_or_else(|| ServiceError::validation("User id is required for update"))?;

        let draft = UserDraft::from(request);
        draft.validate(Utc::now().date_naive())?;

        let user = self.ctx.user_repo().update(user_id, &draft).await?;
        info!(user_id = %user_id, "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Fail with 404 unless the user exists
    pub(crate) async fn ensure_exists(&self, user_id: UserId) -> ServiceResult<()> {
        if self.ctx.user_repo().exists(user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("User", user_id))
        }
    }
}
