use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::{
    entities::{actor, movie_actor},
    error::{AppError, AppResult},
    models::CastPayload,
};

use super::Actors;

pub struct Cast;

impl Cast {
    pub async fn for_movie<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
    ) -> AppResult<Vec<(movie_actor::Model, Option<actor::Model>)>> {
        Ok(movie_actor::Entity::find()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_actor::Column::Id)
            .find_also_related(actor::Entity)
            .all(db)
            .await?)
    }

    /// Links the actor called `payload.actor_name` to the movie. Run inside
    /// the caller's transaction so the name lookup and the insert see the
    /// same snapshot.
    pub async fn link<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        payload: CastPayload,
    ) -> AppResult<movie_actor::Model> {
        let Some(actor) = Actors::find_by_name(db, &payload.actor_name).await? else {
            return Err(AppError::NotFound(format!("actor {:?} not found", payload.actor_name)));
        };

        let existing = movie_actor::Entity::find()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .filter(movie_actor::Column::ActorId.eq(actor.id))
            .filter(movie_actor::Column::MainRole.eq(payload.main_role))
            .count(db)
            .await?;
        if existing > 0 {
            return Err(AppError::Conflict(format!(
                "{} is already cast in movie {movie_id} in this role",
                actor.name
            )));
        }

        debug!(movie_id, actor_id = actor.id, main_role = payload.main_role, "linking actor");
        let model = movie_actor::ActiveModel {
            actor_id: Set(actor.id),
            movie_id: Set(movie_id),
            salary: Set(payload.salary),
            main_role: Set(payload.main_role),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn unlink<C: ConnectionTrait>(
        db: &C,
        movie_id: i32,
        actor_id: i32,
    ) -> AppResult<u64> {
        let res = movie_actor::Entity::delete_many()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .filter(movie_actor::Column::ActorId.eq(actor_id))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "actor {actor_id} is not cast in movie {movie_id}"
            )));
        }
        Ok(res.rows_affected)
    }
}
