//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to domain drafts.

use std::collections::BTreeSet;

use filmorate_core::entities::{Film, FilmDraft, Genre, MpaRating, User, UserDraft};
use filmorate_core::{GenreId, MpaId};

use super::requests::{FilmRequest, UserRequest};
use super::responses::{FilmResponse, GenreResponse, MpaResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
            friends: user.friends.iter().copied().collect(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<UserRequest> for UserDraft {
    fn from(request: UserRequest) -> Self {
        UserDraft::new(request.email, request.login, request.name, request.birthday)
    }
}

// ============================================================================
// Film Mappers
// ============================================================================

impl From<&Film> for FilmResponse {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            mpa: MpaResponse::from(&film.mpa),
            genres: film.genres.iter().map(GenreResponse::from).collect(),
            likes: film.likes.iter().copied().collect(),
        }
    }
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        Self::from(&film)
    }
}

impl From<FilmRequest> for FilmDraft {
    fn from(request: FilmRequest) -> Self {
        let genre_ids: BTreeSet<GenreId> = request
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|genre| GenreId::new(genre.id))
            .collect();

        FilmDraft {
            name: request.name,
            description: request.description,
            release_date: request.release_date,
            duration: request.duration,
            mpa_id: MpaId::new(request.mpa.id),
            genre_ids,
        }
    }
}

// ============================================================================
// Reference Data Mappers
// ============================================================================

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
        }
    }
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

impl From<&MpaRating> for MpaResponse {
    fn from(mpa: &MpaRating) -> Self {
        Self {
            id: mpa.id,
            name: mpa.name.clone(),
        }
    }
}

impl From<MpaRating> for MpaResponse {
    fn from(mpa: MpaRating) -> Self {
        Self {
            id: mpa.id,
            name: mpa.name,
        }
    }
}
