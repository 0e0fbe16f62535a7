//! Film handlers
//!
//! Endpoints for the film catalog, likes and the popularity ranking.

use axum::{extract::State, Json};
use filmorate_service::dto::{FilmRequest, FilmResponse, PopularQuery};
use filmorate_service::{FilmService, LikeService};

use crate::extractors::{ApiQuery, FilmPath, IdPath, LikePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all films
///
/// GET /films
pub async fn list_films(State(state): State<AppState>) -> ApiResult<Json<Vec<FilmResponse>>> {
    let service = FilmService::new(state.service_context());
    Ok(Json(service.list_films().await?))
}

/// Create a film
///
/// POST /films
pub async fn create_film(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FilmRequest>,
) -> ApiResult<Created<Json<FilmResponse>>> {
    let service = FilmService::new(state.service_context());
    let film = service.create_film(request).await?;
    Ok(Created(Json(film)))
}

/// Update a film; the id travels in the body
///
/// PUT /films
pub async fn update_film(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FilmRequest>,
) -> ApiResult<Json<FilmResponse>> {
    let service = FilmService::new(state.service_context());
    Ok(Json(service.update_film(request).await?))
}

/// Get film by ID
///
/// GET /films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    IdPath(path): IdPath<FilmPath>,
) -> ApiResult<Json<FilmResponse>> {
    let service = FilmService::new(state.service_context());
    Ok(Json(service.get_film(path.id).await?))
}

/// Most liked films
///
/// GET /films/popular?count={count}
pub async fn popular_films(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PopularQuery>,
) -> ApiResult<Json<Vec<FilmResponse>>> {
    let service = LikeService::new(state.service_context());
    Ok(Json(service.popular(query.count).await?))
}

/// Like a film
///
/// PUT /films/{id}/like/{userId}
pub async fn add_like(
    State(state): State<AppState>,
    IdPath(path): IdPath<LikePath>,
) -> ApiResult<()> {
    let service = LikeService::new(state.service_context());
    service.add_like(path.id, path.user_id).await?;
    Ok(())
}

/// Withdraw a like
///
/// DELETE /films/{id}/like/{userId}
pub async fn remove_like(
    State(state): State<AppState>,
    IdPath(path): IdPath<LikePath>,
) -> ApiResult<()> {
    let service = LikeService::new(state.service_context());
    service.remove_like(path.id, path.user_id).await?;
    Ok(())
}
