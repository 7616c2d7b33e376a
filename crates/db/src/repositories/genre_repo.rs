//! Repository for the `genre` table.
//!
//! The HTTP surface exposes genres read-only; the write methods exist
//! for out-of-band seeding and tests.

use sqlx::SqlitePool;

use cinelog_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, ReplaceGenre};

/// CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genre (name) VALUES (?) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all genres, ordered by id ascending.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a genre by id. Returns `None` if no row exists.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fully replace a genre's fields. Returns `None` if no row exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &ReplaceGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("UPDATE genre SET name = ? WHERE id = ? RETURNING id, name")
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
