//! Handlers for the `/directors` resource (read-only).
//!
//! Directors are seeded out-of-band; the API never creates or mutates them.

use axum::extract::{Path, State};
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::director::Director;
use cinelog_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list_all(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}
