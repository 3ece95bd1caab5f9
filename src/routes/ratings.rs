use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};
use sea_orm::TransactionTrait;
use tracing::debug;

use super::{Body, Id, Params};
use crate::{
    AppState,
    error::AppResult,
    models::RatingPayload,
    query::{Pagination, RatingWindow},
    repository::{Movies, Ratings},
    validation,
    views::RatingView,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ratings", get(list_ratings))
        .route("/ratings/{movie_id}", post(add_rating_to_movie))
        .route("/ratings/delete/{id}", delete(delete_rating))
}

pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
    Params(window): Params<RatingWindow>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<RatingView>>> {
    let page = state.page(&pagination)?;
    let ratings = Ratings::list(&state.db, &window, page).await?;
    Ok(Json(ratings.into_iter().map(RatingView::from).collect()))
}

/// The rating date is always today; clients cannot supply one.
pub async fn add_rating_to_movie(
    State(state): State<Arc<AppState>>,
    Id(movie_id): Id<i32>,
    Body(payload): Body<RatingPayload>,
) -> AppResult<(StatusCode, Json<RatingView>)> {
    let txn = state.db.begin().await?;
    Movies::get(&txn, movie_id).await?;
    let value = validation::rating(payload.rating)?;
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    let rating = Ratings::create(&txn, movie_id, value, today).await?;
    txn.commit().await?;

    debug!(movie_id, rating = value, "rating added");
    Ok((StatusCode::CREATED, Json(RatingView::from(rating))))
}

pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    Ratings::delete(&txn, id).await?;
    txn.commit().await?;

    debug!(rating_id = id, "rating deleted");
    Ok(StatusCode::NO_CONTENT)
}
