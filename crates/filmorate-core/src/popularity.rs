//! Popularity ranking of films by like count

use std::cmp::Reverse;

use crate::entities::Film;
use crate::error::DomainError;

/// Number of films returned when the caller does not ask for a count
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// Validated upper bound on the size of a popular films listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularCount(usize);

impl PopularCount {
    /// Create from a positive count
    pub fn new(count: usize) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::InvalidPopularCount(0));
        }
        Ok(Self(count))
    }

    /// Resolve an optional request parameter
    ///
    /// Absent means [`DEFAULT_POPULAR_COUNT`]; zero or negative is rejected.
    pub fn from_param(count: Option<i64>) -> Result<Self, DomainError> {
        match count {
            None => Ok(Self(DEFAULT_POPULAR_COUNT)),
            Some(count) if count <= 0 => Err(DomainError::InvalidPopularCount(count)),
            Some(count) => Ok(Self(usize::try_from(count).unwrap_or(usize::MAX))),
        }
    }

    /// Get the count
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Count as a SQL `LIMIT` value
    pub fn as_limit(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl Default for PopularCount {
    fn default() -> Self {
        Self(DEFAULT_POPULAR_COUNT)
    }
}

/// Order films by like count descending, ties by ascending id, and keep
/// at most `count` of them
pub fn rank_by_likes(mut films: Vec<Film>, count: PopularCount) -> Vec<Film> {
    films.sort_by_key(|film| (Reverse(film.like_count()), film.id));
    films.truncate(count.get());
    films
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::entities::MpaRating;
    use crate::value_objects::{FilmId, MpaId, UserId};

    fn film(id: i64, likes: &[i64]) -> Film {
        Film {
            id: FilmId::new(id),
            name: format!("Film {id}"),
            description: None,
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            duration: 90,
            mpa: MpaRating::new(MpaId::new(1), "G"),
            genres: Vec::new(),
            likes: likes.iter().copied().map(UserId::new).collect::<BTreeSet<_>>(),
        }
    }

    fn ranked_ids(films: Vec<Film>, count: usize) -> Vec<i64> {
        rank_by_likes(films, PopularCount::new(count).unwrap())
            .into_iter()
            .map(|f| f.id.into_inner())
            .collect()
    }

    #[test]
    fn test_from_param() {
        assert_eq!(PopularCount::from_param(None).unwrap().get(), 10);
        assert_eq!(PopularCount::from_param(Some(3)).unwrap().get(), 3);
        assert!(matches!(
            PopularCount::from_param(Some(0)),
            Err(DomainError::InvalidPopularCount(0))
        ));
        assert!(PopularCount::from_param(Some(-5)).is_err());
    }

    #[test]
    fn test_rank_orders_by_likes_then_id() {
        let films = vec![film(1, &[1]), film(2, &[1, 2]), film(3, &[]), film(4, &[2])];
        assert_eq!(ranked_ids(films, 10), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_rank_truncates() {
        let films = vec![film(1, &[]), film(2, &[1, 2, 3]), film(3, &[1])];
        assert_eq!(ranked_ids(films, 1), vec![2]);
    }

    #[test]
    fn test_rank_includes_unliked_films() {
        let films = vec![film(2, &[]), film(1, &[])];
        assert_eq!(ranked_ids(films, 5), vec![1, 2]);
    }
}
