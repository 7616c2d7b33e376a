//! Handlers for the `/genres` resource (read-only).
//!
//! Genres are seeded out-of-band; the API never creates or mutates them.
//! Genres serialize through their own model, not the director's.

use axum::extract::{Path, State};
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::genre::Genre;
use cinelog_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list_all(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}
