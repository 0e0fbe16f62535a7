//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{FilmRequest, GenreRef, MpaRef, PopularQuery, UserRequest};

// Re-export commonly used response types
pub use responses::{
    FilmResponse, GenreResponse, HealthChecks, HealthResponse, MpaResponse, ReadinessResponse,
    UserResponse,
};
