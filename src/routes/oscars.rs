use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use sea_orm::TransactionTrait;
use tracing::{debug, info};

use super::{Body, Id, Params};
use crate::{
    AppState,
    entities::oscar,
    error::AppResult,
    models::{OscarPatch, OscarPayload},
    query::{OscarFilter, Pagination},
    repository::Oscars,
    validation,
    views::{self, Action, OscarView},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/oscars", get(list_oscars).post(create_oscar)).route(
        "/oscars/{id}",
        get(get_oscar).put(replace_oscar).patch(patch_oscar).delete(delete_oscar),
    )
}

pub async fn list_oscars(
    State(state): State<Arc<AppState>>,
    Params(filter): Params<OscarFilter>,
    Params(pagination): Params<Pagination>,
) -> AppResult<Json<Vec<OscarView>>> {
    debug!(?filter, "listing oscars");
    let page = state.page(&pagination)?;
    let rows = Oscars::list(&state.db, &filter, page).await?;
    Ok(Json(views::oscars(&state.db, Action::List, rows).await?))
}

pub async fn get_oscar(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<Json<OscarView>> {
    let row = Oscars::get(&state.db, id).await?;
    Ok(Json(views::oscar(&state.db, Action::Retrieve, row).await?))
}

pub async fn create_oscar(
    State(state): State<Arc<AppState>>,
    Body(payload): Body<OscarPayload>,
) -> AppResult<(StatusCode, Json<OscarView>)> {
    let payload = validation::oscar(payload)?;

    let txn = state.db.begin().await?;
    Oscars::ensure_references(&txn, &payload).await?;
    let row = Oscars::create(&txn, payload).await?;
    txn.commit().await?;

    info!(oscar_id = row.id, nomination = %row.nomination, "oscar nomination created");
    Ok((StatusCode::CREATED, Json(views::oscar(&state.db, Action::Create, row).await?)))
}

pub async fn replace_oscar(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(payload): Body<OscarPayload>,
) -> AppResult<Json<OscarView>> {
    update_oscar(&state, id, |_| payload).await
}

pub async fn patch_oscar(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
    Body(patch): Body<OscarPatch>,
) -> AppResult<Json<OscarView>> {
    update_oscar(&state, id, |current| patch.merge(current)).await
}

async fn update_oscar(
    state: &AppState,
    id: i32,
    build: impl FnOnce(oscar::Model) -> OscarPayload,
) -> AppResult<Json<OscarView>> {
    let txn = state.db.begin().await?;
    let current = Oscars::get(&txn, id).await?;
    let payload = validation::oscar(build(current.clone()))?;
    Oscars::ensure_references(&txn, &payload).await?;
    let row = Oscars::update(&txn, current, payload).await?;
    txn.commit().await?;

    debug!(oscar_id = id, "oscar nomination updated");
    Ok(Json(views::oscar(&state.db, Action::Update, row).await?))
}

pub async fn delete_oscar(
    State(state): State<Arc<AppState>>,
    Id(id): Id<i32>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    Oscars::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
