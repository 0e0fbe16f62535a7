//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_pool, ping, DatabaseConfig};
pub use schema::bootstrap;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
