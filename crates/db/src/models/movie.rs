//! Movie entity model and DTOs.

use cinelog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movie` table.
///
/// Every column except `id` is nullable. The wire shape mirrors the row
/// one-to-one, foreign keys included; related directors and genres are
/// referenced by id only, never embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for creating a movie.
///
/// A field omitted from the request body is stored as NULL; an unknown
/// field is a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    /// Accepted for symmetry with the read shape but never used; the id
    /// is always system-assigned.
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for fully replacing a movie.
///
/// Replacement is unconditional: every column is overwritten from this
/// DTO, so a field omitted from the request body nulls the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceMovie {
    /// Accepted but ignored; the path id identifies the row.
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}
