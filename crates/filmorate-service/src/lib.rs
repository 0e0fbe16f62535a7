//! # filmorate-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    FilmService, FriendService, GenreService, LikeService, MpaService, ServiceContext,
    ServiceError, ServiceResult, UserService,
};
