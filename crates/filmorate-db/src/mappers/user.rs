//! User entity <-> model mapper

use std::collections::BTreeSet;

use filmorate_core::entities::User;
use filmorate_core::error::DomainError;
use filmorate_core::value_objects::{FriendPair, UserId};

use crate::models::{FriendshipModel, UserModel};

/// Build a User from its row and the ids of its friends
pub fn user_with_friends(model: UserModel, friends: BTreeSet<UserId>) -> User {
    User {
        id: UserId::new(model.id),
        email: model.email,
        login: model.login,
        name: model.name,
        birthday: model.birthday,
        friends,
    }
}

/// A stored friendship row back into its canonical pair
impl TryFrom<FriendshipModel> for FriendPair {
    type Error = DomainError;

    fn try_from(model: FriendshipModel) -> Result<Self, Self::Error> {
        FriendPair::new(UserId::new(model.user_low), UserId::new(model.user_high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_friends() {
        let model = UserModel {
            id: 4,
            email: "a@b.c".to_string(),
            login: "login".to_string(),
            name: "Name".to_string(),
            birthday: None,
        };
        let friends: BTreeSet<_> = [UserId::new(1)].into_iter().collect();
        let user = user_with_friends(model, friends);
        assert_eq!(user.id, UserId::new(4));
        assert!(user.friends.contains(&UserId::new(1)));
    }

    #[test]
    fn test_friendship_row_to_pair() {
        let pair = FriendPair::try_from(FriendshipModel {
            user_low: 1,
            user_high: 2,
        })
        .unwrap();
        assert_eq!(pair.low(), UserId::new(1));

        let corrupt = FriendPair::try_from(FriendshipModel {
            user_low: 3,
            user_high: 3,
        });
        assert!(corrupt.is_err());
    }
}
