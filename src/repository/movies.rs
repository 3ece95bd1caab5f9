use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::MoviePayload,
    query::{MovieFilter, Page, paged},
};

pub struct Movies;

impl Movies {
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(db).await?.ok_or_else(|| AppError::not_found("movie", id))
    }

    pub async fn list<C: ConnectionTrait>(
        db: &C,
        filter: &MovieFilter,
        page: Option<Page>,
    ) -> AppResult<Vec<movie::Model>> {
        Ok(paged(filter.select(), page).all(db).await?)
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        payload: MoviePayload,
    ) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            name: Set(payload.name),
            description: Set(payload.description),
            duration_in_min: Set(payload.duration_in_min),
            release_year: Set(payload.release_year),
            pic_url: Set(payload.pic_url),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        current: movie::Model,
        payload: MoviePayload,
    ) -> AppResult<movie::Model> {
        let mut model: movie::ActiveModel = current.into();
        model.name = Set(payload.name);
        model.description = Set(payload.description);
        model.duration_in_min = Set(payload.duration_in_min);
        model.release_year = Set(payload.release_year);
        model.pic_url = Set(payload.pic_url);
        Ok(model.update(db).await?)
    }

    /// Ratings, cast links and Oscars go with the movie via `ON DELETE CASCADE`.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("movie", id));
        }
        Ok(())
    }
}
