//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent directly to the router via `tower::ServiceExt`,
//! without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use cinelog_api::config::ServerConfig;
use cinelog_api::router::build_app_router;
use cinelog_api::state::AppState;
use cinelog_db::models::director::CreateDirector;
use cinelog_db::models::genre::CreateGenre;
use cinelog_db::repositories::{DirectorRepo, GenreRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
    }
}

/// Build the full application router against the given pool, with the
/// schema bootstrapped.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    // `#[sqlx::test]` builds its pool with sqlx's default connect options,
    // which turn `PRAGMA foreign_keys` on. The catalog schema declares but
    // does not enforce foreign keys (see `cinelog_db::init_schema`), so
    // restore that for future connections and for the single validation
    // connection the pool already opened.
    let connect_options = (*pool.connect_options()).clone().foreign_keys(false);
    pool.set_connect_options(connect_options);
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&pool)
        .await
        .expect("Failed to disable foreign_keys pragma");

    cinelog_db::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed a director directly through the repository (the HTTP surface is
/// read-only for directors) and return its id.
pub async fn seed_director(pool: &SqlitePool, name: &str) -> i64 {
    DirectorRepo::create(
        pool,
        &CreateDirector {
            name: Some(name.to_string()),
        },
    )
    .await
    .expect("Failed to seed director")
    .id
}

/// Seed a genre directly through the repository and return its id.
pub async fn seed_genre(pool: &SqlitePool, name: &str) -> i64 {
    GenreRepo::create(
        pool,
        &CreateGenre {
            name: Some(name.to_string()),
        },
    )
    .await
    .expect("Failed to seed genre")
    .id
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// POST a raw body string, for exercising malformed-payload handling.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
