//! HTTP-level integration tests for the read-only `/directors` and
//! `/genres` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_director, seed_genre};
use sqlx::SqlitePool;

#[sqlx::test]
async fn list_directors_returns_seeded_rows(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    seed_director(&pool, "Denis Villeneuve").await;
    seed_director(&pool, "Greta Gerwig").await;

    let response = get(app, "/directors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Denis Villeneuve");
    assert_eq!(arr[1]["name"], "Greta Gerwig");
}

#[sqlx::test]
async fn get_director_by_id(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let id = seed_director(&pool, "Denis Villeneuve").await;

    let response = get(app, &format!("/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Denis Villeneuve");
}

#[sqlx::test]
async fn get_nonexistent_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/directors/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn list_genres_returns_seeded_rows(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    seed_genre(&pool, "Sci-Fi").await;

    let response = get(app, "/genres").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn get_genre_serializes_through_its_own_model(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let id = seed_genre(&pool, "Sci-Fi").await;

    let response = get(app, &format!("/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Sci-Fi");
    // Exactly the genre shape: id and name, nothing borrowed from another
    // entity's serializer.
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[sqlx::test]
async fn get_nonexistent_genre_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/genres/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn directors_and_genres_have_no_write_routes(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = common::post_json(app, "/directors", serde_json::json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let app = common::build_test_app(pool).await;
    let response = common::delete(app, "/genres/1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
