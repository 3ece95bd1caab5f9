use jiff::civil::Date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::rating,
    error::{AppError, AppResult},
    query::{Page, RatingWindow, paged},
};

pub struct Ratings;

impl Ratings {
    pub async fn list<C: ConnectionTrait>(
        db: &C,
        window: &RatingWindow,
        page: Option<Page>,
    ) -> AppResult<Vec<rating::Model>> {
        Ok(paged(window.select()?, page).all(db).await?)
    }

    pub async fn for_movie<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        page: Option<Page>,
    ) -> AppResult<Vec<rating::Model>> {
        let select = rating::Entity::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .order_by_asc(rating::Column::Id);
        Ok(paged(select, page).all(db).await?)
    }

    /// `value` must already be range-checked.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        value: i16,
        date: Date,
    ) -> AppResult<rating::Model> {
        let model = rating::ActiveModel {
            movie_id: Set(movie_id),
            rating: Set(value),
            rating_date: Set(date.to_string()),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
        let res = rating::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found("rating", id));
        }
        Ok(())
    }
}
