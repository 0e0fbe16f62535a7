//! Friendship graph queries
//!
//! Friendships are undirected edges stored as [`FriendPair`]s. These helpers
//! answer neighbourhood questions over a set of edges without touching the
//! store, so both storage backends share the same semantics.

use std::collections::BTreeSet;

use crate::value_objects::{FriendPair, UserId};

/// Ids on the other end of every edge touching `user`
pub fn friends_of<'a, I>(edges: I, user: UserId) -> BTreeSet<UserId>
where
    I: IntoIterator<Item = &'a FriendPair>,
{
    edges
        .into_iter()
        .filter_map(|pair| pair.other(user))
        .collect()
}

/// Users who are friends with both sides
///
/// Symmetric in its arguments. Neither side can appear in the result, since
/// nobody is their own friend.
pub fn common_friends(a: &BTreeSet<UserId>, b: &BTreeSet<UserId>) -> BTreeSet<UserId> {
    a.intersection(b).copied().collect()
}
