//! Friend pair - canonical form of a symmetric friendship edge
//!
//! An edge between `a` and `b` is always stored as `(min(a, b), max(a, b))`,
//! so the same friendship can never be recorded twice in different
//! directions and removing it from either side removes it for both.

use crate::error::DomainError;

use super::ids::UserId;

/// Unordered pair of distinct users
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendPair {
    low: UserId,
    high: UserId,
}

impl FriendPair {
    /// Build the canonical pair for `a` and `b`
    ///
    /// # Errors
    /// Returns `DomainError::SelfFriendship` when `a == b`.
    pub fn new(a: UserId, b: UserId) -> Result<Self, DomainError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(DomainError::SelfFriendship(a)),
        }
    }

    /// Smaller user id of the pair
    #[inline]
    pub const fn low(&self) -> UserId {
        self.low
    }

    /// Larger user id of the pair
    #[inline]
    pub const fn high(&self) -> UserId {
        self.high
    }

    /// The other end of the edge, if `user` is one of its ends
    pub fn other(&self, user: UserId) -> Option<UserId> {
        if self.low == user {
            Some(self.high)
        } else if self.high == user {
            Some(self.low)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_canonical() {
        let ab = FriendPair::new(UserId::new(2), UserId::new(1)).unwrap();
        let ba = FriendPair::new(UserId::new(1), UserId::new(2)).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.low(), UserId::new(1));
        assert_eq!(ab.high(), UserId::new(2));
    }

    #[test]
    fn test_self_pair_rejected() {
        let err = FriendPair::new(UserId::new(5), UserId::new(5)).unwrap_err();
        assert!(matches!(err, DomainError::SelfFriendship(id) if id == UserId::new(5)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_other_end() {
        let pair = FriendPair::new(UserId::new(3), UserId::new(8)).unwrap();
        assert_eq!(pair.other(UserId::new(3)), Some(UserId::new(8)));
        assert_eq!(pair.other(UserId::new(8)), Some(UserId::new(3)));
        assert_eq!(pair.other(UserId::new(4)), None);
    }
}
