//! User and friendship database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

/// Database model for friendships table
///
/// Rows are stored canonically with `user_low < user_high`.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct FriendshipModel {
    pub user_low: i64,
    pub user_high: i64,
}
