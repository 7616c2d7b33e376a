//! Director entity model and DTOs.

use cinelog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A director row from the `director` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a director. Directors are read-only over HTTP; this
/// is used for out-of-band seeding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDirector {
    pub name: Option<String>,
}

/// DTO for fully replacing a director's fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceDirector {
    pub name: Option<String>,
}
