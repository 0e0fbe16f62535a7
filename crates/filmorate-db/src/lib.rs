//! # filmorate-db
//!
//! Storage layer implementing the repository traits of `filmorate-core`.
//!
//! ## Overview
//!
//! Two backends are provided:
//!
//! - PostgreSQL via SQLx (`repositories`), with connection pool management,
//!   `FromRow` models, entity mappers and an idempotent schema bootstrap
//! - An in-memory store (`memory`) for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use filmorate_db::pool::{bootstrap, create_pool, DatabaseConfig};
//! use filmorate_db::repositories::PgUserRepository;
//! use filmorate_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     bootstrap(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{bootstrap, create_pool, ping, DatabaseConfig, PgPool};
pub use repositories::{
    PgFilmRepository, PgFriendRepository, PgGenreRepository, PgLikeRepository, PgMpaRepository,
    PgUserRepository,
};
