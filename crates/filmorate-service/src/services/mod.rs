//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod film;
pub mod friend;
pub mod like;
pub mod reference;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use film::FilmService;
pub use friend::FriendService;
pub use like::LikeService;
pub use reference::{GenreService, MpaService};
pub use user::UserService;
