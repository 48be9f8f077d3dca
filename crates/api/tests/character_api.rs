//! HTTP-level integration tests for the `/characters` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    accept, body_json, build_test_app, create_character, create_mission, delete, get, post_json,
    queue_ids,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_character_returns_201(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({"name": "Geralt"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Geralt");
    assert_eq!(json["data"]["experience"], 0);
    assert_eq!(json["data"]["missions"], serde_json::json!([]));
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_character_trims_name(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/characters",
        serde_json::json!({"name": "  Yennefer  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Yennefer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_returns_409_and_keeps_original(pool: PgPool) {
    let id = create_character(&pool, "Ciri").await;
    let m1 = create_mission(&pool, "Find the White Frost", 50).await;
    accept(&pool, id, m1).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/characters",
        serde_json::json!({"name": " Ciri "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/characters/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ciri");
    assert_eq!(json["data"]["experience"], 0);
    assert_eq!(queue_ids(&pool, id).await, vec![m1]);

    let response = get(build_test_app(pool), "/api/v1/characters").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/characters",
        serde_json::json!({"name": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_character_includes_ordered_missions(pool: PgPool) {
    let id = create_character(&pool, "Lambert").await;
    let m1 = create_mission(&pool, "One", 1).await;
    let m2 = create_mission(&pool, "Two", 2).await;
    accept(&pool, id, m2).await;
    accept(&pool, id, m1).await;

    let response = get(build_test_app(pool), &format!("/api/v1/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let missions = json["data"]["missions"].as_array().unwrap();
    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0]["id"], m2);
    assert_eq!(missions[1]["id"], m1);
    assert_eq!(missions[0]["xp_reward"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_character_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/characters/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Character with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_characters_ordered_by_id(pool: PgPool) {
    let a = create_character(&pool, "Zed").await;
    let b = create_character(&pool, "Amy").await;

    let response = get(build_test_app(pool), "/api/v1/characters").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_character_returns_204_and_spares_missions(pool: PgPool) {
    let doomed = create_character(&pool, "Doomed").await;
    let other = create_character(&pool, "Other").await;
    let m1 = create_mission(&pool, "Shared", 5).await;
    accept(&pool, doomed, m1).await;
    accept(&pool, other, m1).await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/characters/{doomed}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/characters/{doomed}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/missions/{m1}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(queue_ids(&pool, other).await, vec![m1]);

    // The freed name can be reused.
    let response = post_json(
        build_test_app(pool),
        "/api/v1/characters",
        serde_json::json!({"name": "Doomed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_character_returns_404(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/v1/characters/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
