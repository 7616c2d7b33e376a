//! Repository for the `director` table.
//!
//! The HTTP surface exposes directors read-only; the write methods exist
//! for out-of-band seeding and tests.

use sqlx::SqlitePool;

use cinelog_core::types::DbId;

use crate::models::director::{CreateDirector, Director, ReplaceDirector};

/// CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDirector,
    ) -> Result<Director, sqlx::Error> {
        sqlx::query_as::<_, Director>("INSERT INTO director (name) VALUES (?) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all directors, ordered by id ascending.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM director ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a director by id. Returns `None` if no row exists.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM director WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fully replace a director's fields. Returns `None` if no row exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &ReplaceDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "UPDATE director SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a director by id. Returns `true` if a row was removed.
    ///
    /// Movies referencing the director keep their dangling `director_id`;
    /// the schema does not enforce the foreign key.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
