use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};
use sea_orm::TransactionTrait;
use tracing::{debug, info};

use super::{Body, Id, Params};
use crate::{
    AppState,
    entities::movie,
    error::AppResult,
    models::{CastPayload, MoviePatch, MoviePayload},
    query::{MovieFilter, Pagination, rating_stats},
    repository::{Cast, Movies, Ratings},
    validation,
    views::{self, Action, AverageRatingView, CastView, MovieActorView, MovieView, RatingView},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(replace_movie).patch(patch_movie).delete(delete_movie),
        )
        .route("/movies/{id}/actors", get(list_cast))
        .route("/movies/{id}/actors/{actor_id}", delete(remove_actor_from_movie))
        .route("/movies/{id}/actor", post(add_actor_to_movie))
        .route("/movies/{id}/ratings", get(list_movie_ratings))
        .route("/movies/{id}/ratings/avg", get(average_rating))
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Params(filter): Params<MovieFilter>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<MovieView>>> {
    debug!(?filter, "listing movies");
    let page = state.page(&pagination)?;
    let movies = Movies::list(&state.db, &filter, page).await?;

    let mut out = Vec::with_capacity(movies.len());
    for movie in movies {
        out.push(views::movie(&state.db, Action::List, movie).await?);
    }
    Ok(Json(out))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<MovieView>> {
    let movie = Movies::get(&state.db, id).await?;
    Ok(Json(views::movie(&state.db, Action::Retrieve, movie).await?))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Body(payload): Body<MoviePayload>,
) -> AppResult<(StatusCode, Json<MovieView>)> {
    let payload = validation::movie(payload, validation::current_year())?;

    let txn = state.db.begin().await?;
    let movie = Movies::create(&txn, payload).await?;
    txn.commit().await?;

    info!(movie_id = movie.id, name = %movie.name, "movie created");
    Ok((StatusCode::CREATED, Json(views::movie(&state.db, Action::Create, movie).await?)))
}

pub async fn replace_movie(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(payload): Body<MoviePayload>,
) -> AppResult<Json<MovieView>> {
    update_movie(&state, id, |_| payload).await
}

pub async fn patch_movie(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(patch): Body<MoviePatch>,
) -> AppResult<Json<MovieView>> {
    update_movie(&state, id, |current| patch.merge(current)).await
}

async fn update_movie(
    state: &AppState,
    id: i32,
    build: impl FnOnce(movie::Model) -> MoviePayload,
) -> AppResult<Json<MovieView>> {
    let txn = state.db.begin().await?;
    let current = Movies::get(&txn, id).await?;
    let payload = validation::movie(build(current.clone()), validation::current_year())?;
    let movie = Movies::update(&txn, current, payload).await?;
    txn.commit().await?;

    debug!(movie_id = id, "movie updated");
    Ok(Json(views::movie(&state.db, Action::Update, movie).await?))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    Movies::delete(&txn, id).await?;
    txn.commit().await?;

    info!(movie_id = id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_cast(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<Vec<CastView>>> {
    Movies::get(&state.db, id).await?;
    let cast = Cast::for_movie(&state.db, id).await?;
    Ok(Json(cast.into_iter().map(CastView::from).collect()))
}

pub async fn add_actor_to_movie(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(payload): Body<CastPayload>,
) -> AppResult<Json<MovieActorView>> {
    let payload = validation::cast(payload)?;

    let txn = state.db.begin().await?;
    Movies::get(&txn, id).await?;
    let link = Cast::link(&txn, id, payload).await?;
    txn.commit().await?;

    Ok(Json(MovieActorView::from(link)))
}

pub async fn remove_actor_from_movie(
    State(state): State<Arc<AppState>>,
    Id((id, actor_id)): Id<(i32, i32)>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let removed = Cast::unlink(&txn, id, actor_id).await?;
    txn.commit().await?;

    debug!(movie_id = id, actor_id, removed, "actor removed from movie");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_movie_ratings(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<RatingView>>> {
    let page = state.page(&pagination)?;
    Movies::get(&state.db, id).await?;
    let ratings = Ratings::for_movie(&state.db, id, page).await?;
    Ok(Json(ratings.into_iter().map(RatingView::from).collect()))
}

pub async fn average_rating(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<AverageRatingView>> {
    Movies::get(&state.db, id).await?;
    let stats = rating_stats(&state.db, id).await?;
    Ok(Json(AverageRatingView::new(id, stats)))
}
