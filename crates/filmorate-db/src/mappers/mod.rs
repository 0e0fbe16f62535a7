//! Entity to model mappers
//!
//! This module provides conversions between domain entities (filmorate-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod film;
mod reference;
mod user;

pub use film::{assemble_films, FilmInsert};
pub use user::user_with_friends;
