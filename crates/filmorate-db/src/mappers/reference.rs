//! Genre / MPA rating <-> model mappers

use filmorate_core::entities::{Genre, MpaRating};
use filmorate_core::value_objects::{GenreId, MpaId};

use crate::models::{GenreModel, MpaModel};

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre::new(GenreId::new(model.id), model.name)
    }
}

impl From<MpaModel> for MpaRating {
    fn from(model: MpaModel) -> Self {
        MpaRating::new(MpaId::new(model.id), model.name)
    }
}
