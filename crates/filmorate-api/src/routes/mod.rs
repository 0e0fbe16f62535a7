//! Route definitions
//!
//! All API routes organized by domain and mounted at the root.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{films, health, reference, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(film_routes())
        .merge(user_routes())
        .merge(reference_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Film routes
fn film_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/films",
            get(films::list_films)
                .post(films::create_film)
                .put(films::update_film),
        )
        // Static segment wins over `:id` in axum's router
        .route("/films/popular", get(films::popular_films))
        .route("/films/:id", get(films::get_film))
        .route(
            "/films/:id/like/:user_id",
            put(films::add_like).delete(films::remove_like),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::list_users)
                .post(users::create_user)
                .put(users::update_user),
        )
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/friends", get(users::get_friends))
        .route(
            "/users/:id/friends/:friend_id",
            put(users::add_friend).delete(users::remove_friend),
        )
        .route(
            "/users/:id/friends/common/:other_id",
            get(users::get_common_friends),
        )
}

/// Genre and MPA rating routes
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(reference::list_genres))
        .route("/genres/:id", get(reference::get_genre))
        .route("/mpa", get(reference::list_mpa))
        .route("/mpa/:id", get(reference::get_mpa))
}
