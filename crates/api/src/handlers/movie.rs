//! Handlers for the `/movies` resource (full CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, Movie, ReplaceMovie};
use cinelog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies
///
/// Returns every movie as a JSON array; 200 with `[]` on an empty store.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list_all(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// POST /movies
///
/// Returns 201 with an empty body; the assigned id is discoverable via
/// the list or get endpoints.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<StatusCode> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::debug!(id = movie.id, "Movie created");
    Ok(StatusCode::CREATED)
}

/// PUT /movies/{id}
///
/// Full replacement: every column is overwritten from the body, so a
/// field omitted from the body nulls the stored value. 404 if the id
/// does not exist.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceMovie>,
) -> AppResult<StatusCode> {
    MovieRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
///
/// 204 on success, 404 if the id does not exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}
