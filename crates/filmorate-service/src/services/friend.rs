//! Friend service
//!
//! Handles the symmetric friendship graph between users.

use tracing::{debug, info, instrument};

use filmorate_core::friendship::common_friends;
use filmorate_core::{FriendPair, UserId};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Friend service
pub struct FriendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendService<'a> {
    /// Create a new FriendService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make two users friends of each other
    ///
    /// Both users must exist. Adding an existing friendship is a no-op.
    #[instrument(skip(self))]
    pub async fn add_friend(&self, user_id: UserId, friend_id: UserId) -> ServiceResult<()> {
        let users = UserService::new(self.ctx);
        users.ensure_exists(user_id).await?;
        users.ensure_exists(friend_id).await?;

        let pair = FriendPair::new(user_id, friend_id)?;
        if self.ctx.friend_repo().add(pair).await? {
            info!(user_id = %user_id, friend_id = %friend_id, "Friendship added");
        } else {
            debug!(user_id = %user_id, friend_id = %friend_id, "Friendship already present");
        }

        Ok(())
    }

    /// End a friendship for both users
    ///
    /// Both users must exist. Removing an absent friendship is a no-op, and a
    /// user is never their own friend.
    #[instrument(skip(self))]
    pub async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> ServiceResult<()> {
        let users = UserService::new(self.ctx);
        users.ensure_exists(user_id).await?;
        users.ensure_exists(friend_id).await?;

        if user_id == friend_id {
            debug!(user_id = %user_id, "No self friendship to remove");
            return Ok(());
        }

        let pair = FriendPair::new(user_id, friend_id)?;
        if self.ctx.friend_repo().remove(pair).await? {
            info!(user_id = %user_id, friend_id = %friend_id, "Friendship removed");
        }

        Ok(())
    }

    /// Friends of a user, ordered by id
    ///
    /// Ids with no stored user are left out.
    #[instrument(skip(self))]
    pub async fn get_friends(&self, user_id: UserId) -> ServiceResult<Vec<UserResponse>> {
        UserService::new(self.ctx).ensure_exists(user_id).await?;

        let ids = self.ctx.friend_repo().friend_ids(user_id).await?;
        let friends = self.ctx.user_repo().find_many(&ids).await?;

        Ok(friends.iter().map(UserResponse::from).collect())
    }

    /// Users who are friends of both `user_id` and `other_id`, ordered by id
    #[instrument(skip(self))]
    pub async fn get_common_friends(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> ServiceResult<Vec<UserResponse>> {
        let users = UserService::new(self.ctx);
        users.ensure_exists(user_id).await?;
        users.ensure_exists(other_id).await?;

        let left = self.ctx.friend_repo().friend_ids(user_id).await?;
        let right = self.ctx.friend_repo().friend_ids(other_id).await?;
        let common = self
            .ctx
            .user_repo()
            .find_many(&common_friends(&left, &right))
            .await?;

        Ok(common.iter().map(UserResponse::from).collect())
    }
}
