pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{director, genre, movie};
use crate::state::AppState;

/// Build the catalog route tree, mounted at the application root.
///
/// ```text
/// GET    /movies           -> list
/// POST   /movies           -> create
/// GET    /movies/{id}      -> get_by_id
/// PUT    /movies/{id}      -> replace
/// DELETE /movies/{id}      -> delete
///
/// GET    /directors        -> list
/// GET    /directors/{id}   -> get_by_id
///
/// GET    /genres           -> list
/// GET    /genres/{id}      -> get_by_id
/// ```
pub fn api_routes() -> Router<AppState> {
    let movie_routes = Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::replace)
                .delete(movie::delete),
        );

    let director_routes = Router::new()
        .route("/", get(director::list))
        .route("/{id}", get(director::get_by_id));

    let genre_routes = Router::new()
        .route("/", get(genre::list))
        .route("/{id}", get(genre::get_by_id));

    Router::new()
        .nest("/movies", movie_routes)
        .nest("/directors", director_routes)
        .nest("/genres", genre_routes)
}
