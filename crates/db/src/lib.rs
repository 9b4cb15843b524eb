//! Persistence layer for camps, talks and speakers.
//!
//! Exposes pool bootstrap helpers, the row/DTO models, and the
//! [`repositories::CampRepository`] port with its PostgreSQL and in-memory
//! implementations.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Errors surfaced by any [`repositories::CampRepository`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A failure reported by sqlx (connectivity, constraint violation, ...).
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A non-sqlx store could not complete the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
