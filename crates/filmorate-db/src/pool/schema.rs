//! Schema bootstrap and reference data seeding

use sqlx::PgPool;
use tracing::{info, instrument};

use filmorate_core::{DEFAULT_GENRES, DEFAULT_MPA_RATINGS};

/// Table definitions, safe to run against an existing database
const SCHEMA: &str = include_str!("../../schema/schema.sql");

/// Create missing tables and seed genres and MPA ratings
///
/// Idempotent: existing tables and seed rows are left untouched.
#[instrument(skip(pool))]
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    let mut tx = pool.begin().await?;

    for (id, name) in DEFAULT_MPA_RATINGS {
        sqlx::query("INSERT INTO mpa_ratings (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for (id, name) in DEFAULT_GENRES {
        sqlx::query("INSERT INTO genres (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        genres = DEFAULT_GENRES.len(),
        mpa_ratings = DEFAULT_MPA_RATINGS.len(),
        "Database schema ready"
    );
    Ok(())
}
