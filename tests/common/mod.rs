#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use imdb_rest::{AppState, app, config::Config, db};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestContext {
    pub app: Router,
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::with_config(Config::default()).await
    }

    pub async fn with_config(config: Config) -> TestContext {
        // One connection: every pooled connection to `:memory:` is its own database.
        let db = db::connect_and_migrate(db::connect_options("sqlite::memory:", 1))
            .await
            .expect("failed to open in-memory database");
        let state = Arc::new(AppState::new(Arc::new(config), db.clone()));

        TestContext { app: app::router(state), db }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let resp = self.app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value =
            if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn create_movie(&self, name: &str, duration: f64, year: i32) -> i64 {
        let (status, body) = self
            .post(
                "/movies",
                json!({
                    "name": name,
                    "description": format!("{name} description"),
                    "duration_in_min": duration,
                    "release_year": year,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_actor(&self, name: &str, birth_year: Option<i32>) -> i64 {
        let (status, body) =
            self.post("/actors", json!({ "name": name, "birth_year": birth_year })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_director(&self, name: &str) -> i64 {
        let (status, body) = self.post("/directors", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn rate(&self, movie_id: i64, rating: i64) -> (StatusCode, Value) {
        self.post(&format!("/ratings/{movie_id}"), json!({ "rating": rating })).await
    }
}
