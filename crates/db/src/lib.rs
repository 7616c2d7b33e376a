//! Persistence layer for the movie catalog.
//!
//! Exposes pool construction, schema bootstrap, the entity models, and
//! one repository per table. All access goes through an explicitly
//! injected [`DbPool`]; nothing here holds global state.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (e.g. `sqlite://catalog.db`).
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Create the catalog tables if they do not exist yet. Idempotent; run
/// once at startup.
///
/// Foreign keys on `movie` are declared but not enforced (SQLite leaves
/// the `foreign_keys` pragma off), so deleting a referenced director or
/// genre leaves dangling movie references rather than failing.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS director (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS genre (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movie (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT,
            description TEXT,
            trailer     TEXT,
            year        INTEGER,
            rating      REAL,
            genre_id    INTEGER REFERENCES genre(id),
            director_id INTEGER REFERENCES director(id)
        )",
    )
    .execute(pool)
    .await?;

    tracing::debug!("Catalog schema ready");
    Ok(())
}
