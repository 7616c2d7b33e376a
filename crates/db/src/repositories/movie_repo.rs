//! Repository for the `movie` table.

use sqlx::SqlitePool;

use cinelog_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, ReplaceMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    ///
    /// The client-supplied `id` (if any) is ignored; SQLite assigns one.
    /// The single INSERT statement is the whole unit of work.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// List all movies, ordered by id ascending.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by id. Returns `None` if no row exists.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fully replace a movie's fields. Every column is overwritten from
    /// `input`, so a `None` field nulls the stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &ReplaceMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = ?,
                description = ?,
                trailer = ?,
                year = ?,
                rating = ?,
                genre_id = ?,
                director_id = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
