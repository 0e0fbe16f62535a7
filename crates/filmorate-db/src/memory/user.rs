//! In-memory UserRepository and FriendRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::instrument;

use filmorate_core::entities::{User, UserDraft};
use filmorate_core::error::DomainError;
use filmorate_core::friendship::friends_of;
use filmorate_core::traits::{FriendRepository, RepoResult, UserRepository};
use filmorate_core::value_objects::{FriendPair, UserId};

use super::MemoryStore;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.store.tables.read().user(id))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let tables = self.store.tables.read();
        Ok(tables.users.keys().filter_map(|id| tables.user(*id)).collect())
    }

    #[instrument(skip(self))]
    async fn find_many(&self, ids: &BTreeSet<UserId>) -> RepoResult<Vec<User>> {
        let tables = self.store.tables.read();
        Ok(ids.iter().filter_map(|id| tables.user(*id)).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: UserId) -> RepoResult<bool> {
        Ok(self.store.tables.read().users.contains_key(&id))
    }

    #[instrument(skip(self, draft), fields(login = %draft.login))]
    async fn create(&self, draft: &UserDraft) -> RepoResult<User> {
        let mut tables = self.store.tables.write();
        let id: UserId = tables.user_ids.next_id();
        tables.users.insert(id, draft.clone());
        Ok(User::from_draft(id, draft, BTreeSet::new()))
    }

    #[instrument(skip(self, draft), fields(login = %draft.login))]
    async fn update(&self, id: UserId, draft: &UserDraft) -> RepoResult<User> {
        let mut tables = self.store.tables.write();
        let stored = tables
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        *stored = draft.clone();
        Ok(User::from_draft(id, draft, tables.resolved_friends(id)))
    }
}

/// In-memory implementation of FriendRepository
///
/// Edges are stored as given; callers check that both users exist.
#[derive(Debug, Clone)]
pub struct MemoryFriendRepository {
    store: MemoryStore,
}

impl MemoryFriendRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FriendRepository for MemoryFriendRepository {
    #[instrument(skip(self))]
    async fn add(&self, pair: FriendPair) -> RepoResult<bool> {
        Ok(self.store.tables.write().friendships.insert(pair))
    }

    #[instrument(skip(self))]
    async fn remove(&self, pair: FriendPair) -> RepoResult<bool> {
        Ok(self.store.tables.write().friendships.remove(&pair))
    }

    #[instrument(skip(self))]
    async fn friend_ids(&self, user: UserId) -> RepoResult<BTreeSet<UserId>> {
        Ok(friends_of(&self.store.tables.read().friendships, user))
    }
}
