use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::{
    entities::oscar,
    error::{AppError, AppResult},
    models::OscarPayload,
    query::{OscarFilter, Page, paged},
};

use super::{Actors, Directors, Movies};

pub struct Oscars;

impl Oscars {
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<oscar::Model> {
        oscar::Entity::find_by_id(id).one(db).await?.ok_or_else(|| AppError::not_found("oscar", id))
    }

    pub async fn list<C: ConnectionTrait>(
        db: &C,
        filter: &OscarFilter,
        page: Option<Page>,
    ) -> AppResult<Vec<oscar::Model>> {
        Ok(paged(filter.select(), page).all(db).await?)
    }

    /// Every referenced row must exist; a missing one is a 404 rather than a
    /// foreign-key failure at insert time.
    pub async fn ensure_references<C: ConnectionTrait>(
        db: &C,
        payload: &OscarPayload,
    ) -> AppResult<()> {
        Movies::get(db, payload.movie_id).await?;
        if let Some(actor_id) = payload.actor_id {
            Actors::get(db, actor_id).await?;
        }
        if let Some(director_id) = payload.director_id {
            Directors::get(db, director_id).await?;
        }
        Ok(())
    }

    /// `payload` must already be validated (nomination upper-cased).
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        payload: OscarPayload,
    ) -> AppResult<oscar::Model> {
        let model = oscar::ActiveModel {
            nomination: Set(payload.nomination),
            ceremony_year: Set(payload.ceremony_year),
            movie_id: Set(payload.movie_id),
            actor_id: Set(payload.actor_id),
            director_id: Set(payload.director_id),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        current: oscar::Model,
        payload: OscarPayload,
    ) -> AppResult<oscar::Model> {
        let mut model: oscar::ActiveModel = current.into();
        model.nomination = Set(payload.nomination);
        model.ceremony_year = Set(payload.ceremony_year);
        model.movie_id = Set(payload.movie_id);
        model.actor_id = Set(payload.actor_id);
        model.director_id = Set(payload.director_id);
        Ok(model.update(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let res = oscar::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("oscar", id));
        }
        Ok(())
    }
}
