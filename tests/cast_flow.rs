mod common;

use axum::http::StatusCode;
use common::TestContext;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use imdb_rest::entities::movie_actor;

#[tokio::test]
async fn test_add_actor_to_movie() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    let actor_id = ctx.create_actor("Leonardo DiCaprio", Some(1974)).await;

    let (status, link) = ctx
        .post(
            &format!("/movies/{movie_id}/actor"),
            json!({ "actor_name": "Leonardo DiCaprio", "salary": 20_000_000, "main_role": true }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(link["actor_id"], actor_id);
    assert_eq!(link["movie_id"], movie_id);
    assert_eq!(link["main_role"], true);

    let (status, cast) = ctx.get(&format!("/movies/{movie_id}/actors")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        cast,
        json!([{
            "id": link["id"],
            "actor_id": actor_id,
            "actor_name": "Leonardo DiCaprio",
            "salary": 20_000_000,
            "main_role": true
        }])
    );

    let (_, detail) = ctx.get(&format!("/movies/{movie_id}")).await;
    assert_eq!(detail["cast"][0]["actor_name"], "Leonardo DiCaprio");
}

#[tokio::test]
async fn test_add_unknown_actor_creates_nothing() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    ctx.create_actor("Tom Hardy", Some(1977)).await;

    let (status, body) = ctx
        .post(
            &format!("/movies/{movie_id}/actor"),
            json!({ "actor_name": "tom hardy", "salary": 10, "main_role": false }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("tom hardy"));

    let links = movie_actor::Entity::find().count(&ctx.db).await.unwrap();
    assert_eq!(links, 0);
}

#[tokio::test]
async fn test_add_actor_to_unknown_movie_is_404() {
    let ctx = TestContext::new().await;
    ctx.create_actor("Tom Hardy", Some(1977)).await;

    let link = json!({ "actor_name": "Tom Hardy", "salary": 10, "main_role": false });
    let (status, _) = ctx.post("/movies/77/actor", link).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_role_is_conflict() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    ctx.create_actor("Elliot Page", Some(1987)).await;
    let uri = format!("/movies/{movie_id}/actor");

    let body = json!({ "actor_name": "Elliot Page", "salary": 5, "main_role": false });
    assert_eq!(ctx.post(&uri, body.clone()).await.0, StatusCode::OK);
    assert_eq!(ctx.post(&uri, body).await.0, StatusCode::CONFLICT);

    let lead = json!({ "actor_name": "Elliot Page", "salary": 5, "main_role": true });
    assert_eq!(ctx.post(&uri, lead).await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_cast_payload_validation() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    ctx.create_actor("Ken Watanabe", Some(1959)).await;
    let uri = format!("/movies/{movie_id}/actor");

    let link = json!({ "actor_name": "Ken Watanabe", "salary": -1, "main_role": true });
    let (status, _) = ctx.post(&uri, link).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.post(&uri, json!({ "actor_name": "Ken Watanabe", "salary": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_actor_from_movie() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    let actor_id = ctx.create_actor("Michael Caine", Some(1933)).await;
    ctx.post(
        &format!("/movies/{movie_id}/actor"),
        json!({ "actor_name": "Michael Caine", "salary": 1, "main_role": false }),
    )
    .await;

    let uri = format!("/movies/{movie_id}/actors/{actor_id}");
    assert_eq!(ctx.delete(&uri).await.0, StatusCode::NO_CONTENT);
    assert_eq!(ctx.delete(&uri).await.0, StatusCode::NOT_FOUND);

    let (_, cast) = ctx.get(&format!("/movies/{movie_id}/actors")).await;
    assert_eq!(cast, json!([]));
}

#[tokio::test]
async fn test_deleting_actor_removes_links() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;
    let actor_id = ctx.create_actor("Tom Berenger", Some(1949)).await;
    ctx.post(
        &format!("/movies/{movie_id}/actor"),
        json!({ "actor_name": "Tom Berenger", "salary": 1, "main_role": false }),
    )
    .await;

    assert_eq!(ctx.delete(&format!("/actors/{actor_id}")).await.0, StatusCode::NO_CONTENT);

    let (_, cast) = ctx.get(&format!("/movies/{movie_id}/actors")).await;
    assert_eq!(cast, json!([]));
}
