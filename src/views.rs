use futures::future::try_join_all;
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::Serialize;

use crate::{
    entities::{actor, director, movie, movie_actor, oscar, rating},
    error::AppResult,
    query::{RatingStats, rating_stats},
    repository::Cast,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Movie,
    Actor,
    Director,
    Rating,
    Cast,
    Oscar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// The row's own columns.
    Flat,
    /// Flat plus cast and rating aggregates.
    Detailed,
    /// Flat plus the names of every referenced row.
    Named,
}

pub fn shape(resource: Resource, action: Action) -> Shape {
    match (resource, action) {
        (Resource::Movie, Action::Retrieve) => Shape::Detailed,
        (Resource::Oscar, Action::List | Action::Retrieve) => Shape::Named,
        _ => Shape::Flat,
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PersonView {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
}

impl From<actor::Model> for PersonView {
    fn from(m: actor::Model) -> Self {
        Self { id: m.id, name: m.name, birth_year: m.birth_year }
    }
}

impl From<director::Model> for PersonView {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name, birth_year: m.birth_year }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RatingView {
    pub id: i32,
    pub movie_id: i32,
    pub rating: i16,
    pub rating_date: String,
}

impl From<rating::Model> for RatingView {
    fn from(m: rating::Model) -> Self {
        Self { id: m.id, movie_id: m.movie_id, rating: m.rating, rating_date: m.rating_date }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieActorView {
    pub id: i32,
    pub actor_id: i32,
    pub movie_id: i32,
    pub salary: i32,
    pub main_role: bool,
}

impl From<movie_actor::Model> for MovieActorView {
    fn from(m: movie_actor::Model) -> Self {
        Self {
            id: m.id,
            actor_id: m.actor_id,
            movie_id: m.movie_id,
            salary: m.salary,
            main_role: m.main_role,
        }
    }
}

/// One line of a movie's cast.
#[derive(Clone, Debug, Serialize)]
pub struct CastView {
    pub id: i32,
    pub actor_id: i32,
    pub actor_name: Option<String>,
    pub salary: i32,
    pub main_role: bool,
}

impl From<(movie_actor::Model, Option<actor::Model>)> for CastView {
    fn from((link, actor): (movie_actor::Model, Option<actor::Model>)) -> Self {
        Self {
            id: link.id,
            actor_id: link.actor_id,
            actor_name: actor.map(|a| a.name),
            salary: link.salary,
            main_role: link.main_role,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AverageRatingView {
    pub movie_id: i32,
    pub average_rating: Option<f64>,
    pub rating_count: u64,
}

impl AverageRatingView {
    pub fn new(movie_id: i32, stats: RatingStats) -> Self {
        Self { movie_id, average_rating: stats.average, rating_count: stats.count }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration_in_min: f64,
    pub release_year: i32,
    pub pic_url: Option<String>,
    #[serde(flatten)]
    pub details: Option<MovieDetails>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieDetails {
    pub cast: Vec<CastView>,
    pub average_rating: Option<f64>,
    pub rating_count: u64,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            duration_in_min: m.duration_in_min,
            release_year: m.release_year,
            pic_url: m.pic_url,
            details: None,
        }
    }
}

pub async fn movie<C: ConnectionTrait>(
    db: &C,
    action: Action,
    model: movie::Model,
) -> AppResult<MovieView> {
    let details = match shape(Resource::Movie, action) {
        Shape::Detailed => {
            let cast = Cast::for_movie(db, model.id).await?;
            let stats = rating_stats(db, model.id).await?;
            Some(MovieDetails {
                cast: cast.into_iter().map(CastView::from).collect(),
                average_rating: stats.average,
                rating_count: stats.count,
            })
        }
        Shape::Flat | Shape::Named => None,
    };
    Ok(MovieView { details, ..MovieView::from(model) })
}

#[derive(Clone, Debug, Serialize)]
pub struct OscarView {
    pub id: i32,
    pub nomination: String,
    pub ceremony_year: Option<i32>,
    pub movie_id: i32,
    pub actor_id: Option<i32>,
    pub director_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director_name: Option<String>,
}

impl From<oscar::Model> for OscarView {
    fn from(m: oscar::Model) -> Self {
        Self {
            id: m.id,
            nomination: m.nomination,
            ceremony_year: m.ceremony_year,
            movie_id: m.movie_id,
            actor_id: m.actor_id,
            director_id: m.director_id,
            movie_name: None,
            actor_name: None,
            director_name: None,
        }
    }
}

pub async fn oscar<C: ConnectionTrait>(
    db: &C,
    action: Action,
    model: oscar::Model,
) -> AppResult<OscarView> {
    match shape(Resource::Oscar, action) {
        Shape::Named => named_oscar(db, model).await,
        Shape::Flat | Shape::Detailed => Ok(OscarView::from(model)),
    }
}

/// Resolves names row by row (one lookup per reference). Output order
/// matches `models`.
pub async fn oscars<C: ConnectionTrait>(
    db: &C,
    action: Action,
    models: Vec<oscar::Model>,
) -> AppResult<Vec<OscarView>> {
    try_join_all(models.into_iter().map(|m| oscar(db, action, m))).await
}

async fn named_oscar<C: ConnectionTrait>(db: &C, model: oscar::Model) -> AppResult<OscarView> {
    let movie_name = movie::Entity::find_by_id(model.movie_id).one(db).await?.map(|m| m.name);
    let actor_name = match model.actor_id {
        Some(id) => actor::Entity::find_by_id(id).one(db).await?.map(|a| a.name),
        None => None,
    };
    let director_name = match model.director_id {
        Some(id) => director::Entity::find_by_id(id).one(db).await?.map(|d| d.name),
        None => None,
    };
    Ok(OscarView { movie_name, actor_name, director_name, ..OscarView::from(model) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_movie_retrieve_is_detailed() {
        assert_eq!(shape(Resource::Movie, Action::Retrieve), Shape::Detailed);
        assert_eq!(shape(Resource::Movie, Action::List), Shape::Flat);
        assert_eq!(shape(Resource::Movie, Action::Create), Shape::Flat);
        assert_eq!(shape(Resource::Actor, Action::Retrieve), Shape::Flat);
    }

    #[test]
    fn oscar_reads_resolve_names_but_writes_do_not() {
        assert_eq!(shape(Resource::Oscar, Action::List), Shape::Named);
        assert_eq!(shape(Resource::Oscar, Action::Retrieve), Shape::Named);
        assert_eq!(shape(Resource::Oscar, Action::Create), Shape::Flat);
        assert_eq!(shape(Resource::Oscar, Action::Update), Shape::Flat);
    }

    #[test]
    fn flat_movie_has_no_detail_keys() {
        let view = MovieView::from(movie::Model {
            id: 1,
            name: "Inception".into(),
            description: "Dreams".into(),
            duration_in_min: 148.0,
            release_year: 2010,
            pic_url: None,
        });
        let json = serde_json::to_value(view).unwrap();
        assert!(json.get("cast").is_none());
        assert!(json.get("average_rating").is_none());
        assert_eq!(json["pic_url"], serde_json::Value::Null);
    }

    #[test]
    fn unresolved_oscar_names_are_omitted() {
        let view = OscarView::from(oscar::Model {
            id: 2,
            nomination: "BEST PICTURE".into(),
            ceremony_year: Some(2011),
            movie_id: 1,
            actor_id: None,
            director_id: None,
        });
        let json = serde_json::to_value(view).unwrap();
        assert!(json.get("movie_name").is_none());
        assert_eq!(json["actor_id"], serde_json::Value::Null);
    }
}
