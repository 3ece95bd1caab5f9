mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::{Value, json};

#[tokio::test]
async fn test_rating_is_created_with_todays_date() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;

    let (status, body) = ctx.rate(movie_id, 9).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rating"], 9);
    assert_eq!(body["movie_id"], movie_id);

    let today: jiff::civil::Date = jiff::Zoned::now().into();
    assert_eq!(body["rating_date"], today.to_string());
}

#[tokio::test]
async fn test_rating_outside_range_is_rejected() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("Inception", 148.0, 2010).await;

    for bad in [0, 11, -1, 100] {
        let (status, body) = ctx.rate(movie_id, bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "rating {bad}");
        assert!(body["error"].as_str().unwrap().contains("between 1 and 10"));
    }

    let (status, _) = ctx.post(&format!("/ratings/{movie_id}"), json!({ "rating": "seven" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, ratings) = ctx.get(&format!("/movies/{movie_id}/ratings")).await;
    assert_eq!(ratings, json!([]));
}

#[tokio::test]
async fn test_rating_unknown_movie_is_404() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.rate(42, 5).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_average_rating() {
    let ctx = TestContext::new().await;
    let rated = ctx.create_movie("Rated", 100.0, 2000).await;
    let unrated = ctx.create_movie("Unrated", 100.0, 2000).await;

    ctx.rate(rated, 4).await;
    ctx.rate(rated, 8).await;

    let (status, body) = ctx.get(&format!("/movies/{rated}/ratings/avg")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_rating"], 6.0);
    assert_eq!(body["rating_count"], 2);

    let (status, body) = ctx.get(&format!("/movies/{unrated}/ratings/avg")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_rating"], Value::Null);
    assert_eq!(body["rating_count"], 0);

    let (status, _) = ctx.get("/movies/404/ratings/avg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, detail) = ctx.get(&format!("/movies/{rated}")).await;
    assert_eq!(detail["average_rating"], 6.0);
}

#[tokio::test]
async fn test_movie_ratings_are_scoped_to_the_movie() {
    let ctx = TestContext::new().await;
    let a = ctx.create_movie("A", 100.0, 2000).await;
    let b = ctx.create_movie("B", 100.0, 2000).await;
    ctx.rate(a, 3).await;
    ctx.rate(b, 10).await;
    ctx.rate(a, 5).await;

    let (_, body) = ctx.get(&format!("/movies/{a}/ratings")).await;
    let values: Vec<_> = body.as_array().unwrap().iter().map(|r| r["rating"].clone()).collect();
    assert_eq!(values, vec![json!(3), json!(5)]);

    let (_, all) = ctx.get("/ratings").await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_rating() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("A", 100.0, 2000).await;
    let (_, rating) = ctx.rate(movie_id, 6).await;
    let id = rating["id"].as_i64().unwrap();

    let (status, _) = ctx.delete(&format!("/ratings/delete/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = ctx.delete(&format!("/ratings/delete/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ratings_date_window() {
    let ctx = TestContext::new().await;
    let movie_id = ctx.create_movie("A", 100.0, 2000).await;
    ctx.rate(movie_id, 6).await;

    let today: jiff::civil::Date = jiff::Zoned::now().into();

    let (status, body) = ctx.get(&format!("/ratings?from_date={today}&to_date={today}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = ctx.get("/ratings?to_date=2000-01-01").await;
    assert_eq!(body, json!([]));

    let (status, _) = ctx.get("/ratings?from_date=2020-02-02&to_date=2020-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.get("/ratings?from_date=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
