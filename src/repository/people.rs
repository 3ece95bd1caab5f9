use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::{actor, director},
    error::{AppError, AppResult},
    models::PersonPayload,
    query::{Page, paged},
};

pub struct Actors;

impl Actors {
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<actor::Model> {
        actor::Entity::find_by_id(id).one(db).await?.ok_or_else(|| AppError::not_found("actor", id))
    }

    /// Exact, case-sensitive name match. Homonyms resolve to the oldest row.
    pub async fn find_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> AppResult<Option<actor::Model>> {
        Ok(actor::Entity::find()
            .filter(actor::Column::Name.eq(name))
            .order_by_asc(actor::Column::Id)
            .one(db)
            .await?)
    }

    pub async fn list<C: ConnectionTrait>(
        db: &C,
        page: Option<Page>,
    ) -> AppResult<Vec<actor::Model>> {
        let select = actor::Entity::find().order_by_asc(actor::Column::Id);
        Ok(paged(select, page).all(db).await?)
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        payload: PersonPayload,
    ) -> AppResult<actor::Model> {
        let model = actor::ActiveModel {
            name: Set(payload.name),
            birth_year: Set(payload.birth_year),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        current: actor::Model,
        payload: PersonPayload,
    ) -> AppResult<actor::Model> {
        let mut model: actor::ActiveModel = current.into();
        model.name = Set(payload.name);
        model.birth_year = Set(payload.birth_year);
        Ok(model.update(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let res = actor::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("actor", id));
        }
        Ok(())
    }
}

pub struct Directors;

impl Directors {
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<director::Model> {
        director::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("director", id))
    }

    pub async fn list<C: ConnectionTrait>(
        db: &C,
        page: Option<Page>,
    ) -> AppResult<Vec<director::Model>> {
        let select = director::Entity::find().order_by_asc(director::Column::Id);
        Ok(paged(select, page).all(db).await?)
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        payload: PersonPayload,
    ) -> AppResult<director::Model> {
        let model = director::ActiveModel {
            name: Set(payload.name),
            birth_year: Set(payload.birth_year),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        current: director::Model,
        payload: PersonPayload,
    ) -> AppResult<director::Model> {
        let mut model: director::ActiveModel = current.into();
        model.name = Set(payload.name);
        model.birth_year = Set(payload.birth_year);
        Ok(model.update(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let res = director::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("director", id));
        }
        Ok(())
    }
}
