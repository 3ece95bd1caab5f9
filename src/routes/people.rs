//! Actors and directors share a shape and a lifecycle; only actors carry the
//! minimum-age rule.

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use sea_orm::TransactionTrait;
use tracing::info;

use super::{Body, Id, Params};
use crate::{
    AppState,
    error::AppResult,
    models::{PersonPatch, PersonPayload},
    query::Pagination,
    repository::{Actors, Directors},
    validation,
    views::PersonView,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/actors", get(list_actors).post(create_actor))
        .route(
            "/actors/{id}",
            get(get_actor).put(replace_actor).patch(patch_actor).delete(delete_actor),
        )
        .route("/directors", get(list_directors).post(create_director))
        .route(
            "/directors/{id}",
            get(get_director).put(replace_director).patch(patch_director).delete(delete_director),
        )
}

fn check_actor(state: &AppState, payload: PersonPayload) -> AppResult<PersonPayload> {
    validation::actor(payload, state.min_age(), validation::current_year())
}

pub async fn list_actors(
    State(state): State<Arc<AppState>>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<PersonView>>> {
    let page = state.page(&pagination)?;
    let actors = Actors::list(&state.db, page).await?;
    Ok(Json(actors.into_iter().map(PersonView::from).collect()))
}

pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<PersonView>> {
    Ok(Json(Actors::get(&state.db, id).await?.into()))
}

pub async fn create_actor(
    State(state): State<Arc<AppState>>,
    Body(payload): Body<PersonPayload>,
) -> AppResult<(StatusCode, Json<PersonView>)> {
    let payload = check_actor(&state, payload)?;

    let txn = state.db.begin().await?;
    let actor = Actors::create(&txn, payload).await?;
    txn.commit().await?;

    info!(actor_id = actor.id, name = %actor.name, "actor created");
    Ok((StatusCode::CREATED, Json(actor.into())))
}

pub async fn replace_actor(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(payload): Body<PersonPayload>,
) -> AppResult<Json<PersonView>> {
    let txn = state.db.begin().await?;
    let current = Actors::get(&txn, id).await?;
    let actor = Actors::update(&txn, current, check_actor(&state, payload)?).await?;
    txn.commit().await?;
    Ok(Json(actor.into()))
}

pub async fn patch_actor(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(patch): Body<PersonPatch>,
) -> AppResult<Json<PersonView>> {
    let txn = state.db.begin().await?;
    let current = Actors::get(&txn, id).await?;
    let payload = check_actor(&state, patch.merge_actor(current.clone()))?;
    let actor = Actors::update(&txn, current, payload).await?;
    txn.commit().await?;
    Ok(Json(actor.into()))
}

pub async fn delete_actor(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    Actors::delete(&txn, id).await?;
    txn.commit().await?;

    info!(actor_id = id, "actor deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_directors(
    State(state): State<Arc<AppState>>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<PersonView>>> {
    let page = state.page(&pagination)?;
    let directors = Directors::list(&state.db, page).await?;
    Ok(Json(directors.into_iter().map(PersonView::from).collect()))
}

pub async fn get_director(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<PersonView>> {
    Ok(Json(Directors::get(&state.db, id).await?.into()))
}

pub async fn create_director(
    State(state): State<Arc<AppState>>,
    Body(payload): Body<PersonPayload>,
) -> AppResult<(StatusCode, Json<PersonView>)> {
    let payload = validation::person(payload, validation::current_year())?;

    let txn = state.db.begin().await?;
    let director = Directors::create(&txn, payload).await?;
    txn.commit().await?;

    info!(director_id = director.id, name = %director.name, "director created");
    Ok((StatusCode::CREATED, Json(director.into())))
}

pub async fn replace_director(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(payload): Body<PersonPayload>,
) -> AppResult<Json<PersonView>> {
    let payload = validation::person(payload, validation::current_year())?;

    let txn = state.db.begin().await?;
    let current = Directors::get(&txn, id).await?;
    let director = Directors::update(&txn, current, payload).await?;
    txn.commit().await?;
    Ok(Json(director.into()))
}

pub async fn patch_director(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(patch): Body<PersonPatch>,
) -> AppResult<Json<PersonView>> {
    let txn = state.db.begin().await?;
    let current = Directors::get(&txn, id).await?;
    let payload =
        validation::person(patch.merge_director(current.clone()), validation::current_year())?;
    let director = Directors::update(&txn, current, payload).await?;
    txn.commit().await?;
    Ok(Json(director.into()))
}

pub async fn delete_director(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    Directors::delete(&txn, id).await?;
    txn.commit().await?;

    info!(director_id = id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
