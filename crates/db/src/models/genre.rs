//! Genre entity model and DTOs.

use cinelog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A genre row from the `genre` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a genre. Genres are read-only over HTTP; this is
/// used for out-of-band seeding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGenre {
    pub name: Option<String>,
}

/// DTO for fully replacing a genre's fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceGenre {
    pub name: Option<String>,
}
