//! Film entity - a catalog entry with a rating, genres, and likes

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::DomainError;
use crate::value_objects::{FilmId, GenreId, MpaId, UserId};

use super::genre::Genre;
use super::mpa::MpaRating;

/// Earliest accepted release date: the first public film screening
pub const CINEMA_BIRTHDAY: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => panic!("invalid cinema birthday"),
};

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Film entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: FilmId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Duration in minutes
    pub duration: i32,
    pub mpa: MpaRating,
    /// Unique genres ordered by id
    pub genres: Vec<Genre>,
    /// Users who liked the film
    pub likes: BTreeSet<UserId>,
}

impl Film {
    /// Number of likes
    #[inline]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Field values for creating or replacing a film
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDraft {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: MpaId,
    /// Duplicate genre references collapse here
    pub genre_ids: BTreeSet<GenreId>,
}

impl FilmDraft {
    /// Check the domain rules that do not need the store
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::BlankFilmName);
        }

        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Err(DomainError::DescriptionTooLong {
                    max: MAX_DESCRIPTION_LENGTH,
                });
            }
        }

        validate_release_date(self.release_date)?;

        if self.duration <= 0 {
            return Err(DomainError::NonPositiveDuration(self.duration));
        }

        Ok(())
    }
}

/// Release date must not precede [`CINEMA_BIRTHDAY`]
pub fn validate_release_date(date: NaiveDate) -> Result<(), DomainError> {
    if date < CINEMA_BIRTHDAY {
        return Err(DomainError::ReleaseDateTooEarly(date));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FilmDraft {
        FilmDraft {
            name: "Valid name".to_string(),
            description: Some("Valid description".to_string()),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            duration: 120,
            mpa_id: MpaId::new(1),
            genre_ids: BTreeSet::new(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_release_date_boundary() {
        let too_early = NaiveDate::from_ymd_opt(1895, 12, 27).unwrap();
        assert!(matches!(
            validate_release_date(too_early),
            Err(DomainError::ReleaseDateTooEarly(_))
        ));
        assert!(validate_release_date(CINEMA_BIRTHDAY).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut film = draft();
        film.name = " ".to_string();
        assert!(matches!(film.validate(), Err(DomainError::BlankFilmName)));
    }

    #[test]
    fn test_description_length_counts_chars() {
        let mut film = draft();
        film.description = Some("Ж".repeat(200));
        assert!(film.validate().is_ok());

        film.description = Some("A".repeat(201));
        assert!(matches!(
            film.validate(),
            Err(DomainError::DescriptionTooLong { max: 200 })
        ));
    }

    #[test]
    fn test_duration_must_be_positive() {
        let mut film = draft();
        film.duration = 0;
        assert!(matches!(
            film.validate(),
            Err(DomainError::NonPositiveDuration(0))
        ));
        film.duration = -1;
        assert!(film.validate().is_err());
    }
}
