//! Domain entities - core business objects

mod film;
mod genre;
mod like;
mod mpa;
mod user;

pub use film::{validate_release_date, Film, FilmDraft, CINEMA_BIRTHDAY, MAX_DESCRIPTION_LENGTH};
pub use genre::{Genre, DEFAULT_GENRES};
pub use like::Like;
pub use mpa::{MpaRating, DEFAULT_MPA_RATINGS};
pub use user::{display_name, validate_login, User, UserDraft};
