//! In-memory storage backend
//!
//! Every table lives behind a single `parking_lot::RwLock`, so each
//! repository call observes and mutates a consistent snapshot. `BTreeMap`s
//! keep listings ordered by id without an extra sort.

mod film;
mod reference;
mod user;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use filmorate_core::entities::{Film, FilmDraft, Genre, Like, MpaRating, User, UserDraft};
use filmorate_core::error::DomainError;
use filmorate_core::friendship::friends_of;
use filmorate_core::value_objects::{FilmId, FriendPair, GenreId, IdSequence, MpaId, UserId};

pub use film::{MemoryFilmRepository, MemoryLikeRepository};
pub use reference::{MemoryGenreRepository, MemoryMpaRepository};
pub use user::{MemoryFriendRepository, MemoryUserRepository};

/// Stored film fields; genres and likes are resolved on read
#[derive(Debug, Clone)]
struct FilmRecord {
    name: String,
    description: Option<String>,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: MpaId,
    genre_ids: BTreeSet<GenreId>,
}

impl From<&FilmDraft> for FilmRecord {
    fn from(draft: &FilmDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            release_date: draft.release_date,
            duration: draft.duration,
            mpa_id: draft.mpa_id,
            genre_ids: draft.genre_ids.clone(),
        }
    }
}

/// All tables of the store
#[derive(Debug)]
struct Tables {
    users: BTreeMap<UserId, UserDraft>,
    friendships: BTreeSet<FriendPair>,
    films: BTreeMap<FilmId, FilmRecord>,
    likes: BTreeSet<Like>,
    genres: BTreeMap<GenreId, Genre>,
    mpa: BTreeMap<MpaId, MpaRating>,
    user_ids: IdSequence,
    film_ids: IdSequence,
}

impl Tables {
    fn seeded() -> Self {
        Self {
            users: BTreeMap::new(),
            friendships: BTreeSet::new(),
            films: BTreeMap::new(),
            likes: BTreeSet::new(),
            genres: Genre::defaults().into_iter().map(|g| (g.id, g)).collect(),
            mpa: MpaRating::defaults().into_iter().map(|m| (m.id, m)).collect(),
            user_ids: IdSequence::new(),
            film_ids: IdSequence::new(),
        }
    }

    fn user(&self, id: UserId) -> Option<User> {
        let draft = self.users.get(&id)?;
        Some(User::from_draft(id, draft, self.resolved_friends(id)))
    }

    /// Friend ids of `id` that still name a stored user
    fn resolved_friends(&self, id: UserId) -> BTreeSet<UserId> {
        friends_of(&self.friendships, id)
            .into_iter()
            .filter(|friend| self.users.contains_key(friend))
            .collect()
    }

    /// The rating and every genre named by a draft must exist
    fn check_references(&self, draft: &FilmDraft) -> Result<(), DomainError> {
        if !self.mpa.contains_key(&draft.mpa_id) {
            return Err(DomainError::MpaNotFound(draft.mpa_id));
        }
        if let Some(missing) = draft.genre_ids.iter().find(|id| !self.genres.contains_key(id)) {
            return Err(DomainError::GenreNotFound(*missing));
        }
        Ok(())
    }

    fn film(&self, id: FilmId) -> Result<Option<Film>, DomainError> {
        match self.films.get(&id) {
            Some(record) => self.assemble(id, record).map(Some),
            None => Ok(None),
        }
    }

    fn assemble(&self, id: FilmId, record: &FilmRecord) -> Result<Film, DomainError> {
        let mpa = self
            .mpa
            .get(&record.mpa_id)
            .cloned()
            .ok_or(DomainError::MpaNotFound(record.mpa_id))?;

        let genres = record
            .genre_ids
            .iter()
            .filter_map(|genre_id| self.genres.get(genre_id).cloned())
            .collect();

        let likes = self
            .likes
            .range(Like::new(id, UserId::new(i64::MIN))..=Like::new(id, UserId::new(i64::MAX)))
            .map(|like| like.user_id)
            .collect();

        Ok(Film {
            id,
            name: record.name.clone(),
            description: record.description.clone(),
            release_date: record.release_date,
            duration: record.duration,
            mpa,
            genres,
            likes,
        })
    }
}

/// Shared handle to the in-memory tables
///
/// Cloning is cheap; all clones see the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store seeded with the default genres and MPA ratings
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::seeded())),
        }
    }

    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(self.clone())
    }

    pub fn friends(&self) -> MemoryFriendRepository {
        MemoryFriendRepository::new(self.clone())
    }

    pub fn films(&self) -> MemoryFilmRepository {
        MemoryFilmRepository::new(self.clone())
    }

    pub fn likes(&self) -> MemoryLikeRepository {
        MemoryLikeRepository::new(self.clone())
    }

    pub fn genres(&self) -> MemoryGenreRepository {
        MemoryGenreRepository::new(self.clone())
    }

    pub fn mpa(&self) -> MemoryMpaRepository {
        MemoryMpaRepository::new(self.clone())
    }
}
