//! Reference data handlers
//!
//! Read-only endpoints for genres and MPA ratings.

use axum::{extract::State, Json};
use filmorate_service::dto::{GenreResponse, MpaResponse};
use filmorate_service::{GenreService, MpaService};

use crate::extractors::{GenrePath, IdPath, MpaPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /genres
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.list_genres().await?))
}

/// GET /genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    IdPath(path): IdPath<GenrePath>,
) -> ApiResult<Json<GenreResponse>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.get_genre(path.id).await?))
}

/// GET /mpa
pub async fn list_mpa(State(state): State<AppState>) -> ApiResult<Json<Vec<MpaResponse>>> {
    let service = MpaService::new(state.service_context());
    Ok(Json(service.list_ratings().await?))
}

/// GET /mpa/{id}
pub async fn get_mpa(
    State(state): State<AppState>,
    IdPath(path): IdPath<MpaPath>,
) -> ApiResult<Json<MpaResponse>> {
    let service = MpaService::new(state.service_context());
    Ok(Json(service.get_rating(path.id).await?))
}
