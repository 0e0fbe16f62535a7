//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};

/// Create or update user request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl UserBody {
    pub fn new(login: &str) -> Self {
        Self {
            id: None,
            email: format!("{login}@mail.ru"),
            login: login.to_string(),
            name: Some(format!("{login} name")),
            birthday: Some("1946-08-20".to_string()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Reference by id, used for `mpa` and `genres`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

/// Create or update film request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub release_date: String,
    pub duration: i32,
    pub mpa: IdRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<IdRef>>,
}

impl FilmBody {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description: Some("adipisicing".to_string()),
            release_date: "1967-03-25".to_string(),
            duration: 100,
            mpa: IdRef { id: 1 },
            genres: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genres(mut self, ids: &[i64]) -> Self {
        self.genres = Some(ids.iter().map(|&id| IdRef { id }).collect());
        self
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<String>,
    pub friends: Vec<i64>,
}

/// Genre or MPA rating response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Film response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub release_date: String,
    pub duration: i32,
    pub mpa: NamedRef,
    pub genres: Vec<NamedRef>,
    pub likes: Vec<i64>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub description: String,
}

/// Ids of a list of users
pub fn user_ids(users: &[UserResponse]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

/// Ids of a list of films
pub fn film_ids(films: &[FilmResponse]) -> Vec<i64> {
    films.iter().map(|f| f.id).collect()
}
