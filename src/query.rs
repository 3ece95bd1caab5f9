use jiff::civil::Date;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};
use serde::Deserialize;

use crate::{
    entities::{movie, oscar, rating},
    error::{AppError, AppResult},
    validation::normalize_nomination,
};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub name: Option<String>,
    pub duration_from: Option<f64>,
    pub duration_to: Option<f64>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

impl MovieFilter {
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(name) = &self.name {
            cond = cond.add(lower(movie::Column::Name).eq(name.to_lowercase()));
        }
        if let Some(from) = self.duration_from {
            cond = cond.add(movie::Column::DurationInMin.gte(from));
        }
        if let Some(to) = self.duration_to {
            cond = cond.add(movie::Column::DurationInMin.lte(to));
        }
        if let Some(description) = &self.description {
            cond = cond.add(lower(movie::Column::Description).like(contains(description)));
        }
        if let Some(year) = self.release_year {
            cond = cond.add(movie::Column::ReleaseYear.eq(year));
        }
        cond
    }

    pub fn select(&self) -> Select<movie::Entity> {
        movie::Entity::find().filter(self.condition()).order_by_asc(movie::Column::Id)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OscarFilter {
    pub ceremony_year: Option<i32>,
    pub nomination: Option<String>,
    pub actor_nominations: Option<bool>,
}

impl OscarFilter {
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(year) = self.ceremony_year {
            cond = cond.add(oscar::Column::CeremonyYear.eq(year));
        }
        if let Some(nomination) = &self.nomination {
            cond = cond.add(oscar::Column::Nomination.eq(normalize_nomination(nomination)));
        }
        if self.actor_nominations == Some(true) {
            cond = cond.add(oscar::Column::ActorId.is_not_null());
        }
        cond
    }

    pub fn select(&self) -> Select<oscar::Entity> {
        oscar::Entity::find().filter(self.condition()).order_by_asc(oscar::Column::Id)
    }
}

/// Inclusive `rating_date` window; either bound may be left open.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RatingWindow {
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
}

impl RatingWindow {
    pub fn condition(&self) -> AppResult<Condition> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            if from > to {
                return Err(AppError::Validation(format!(
                    "from_date {from} is after to_date {to}"
                )));
            }
        }
        // ISO dates compare correctly as text.
        let mut cond = Condition::all();
        if let Some(from) = self.from_date {
            cond = cond.add(rating::Column::RatingDate.gte(from.to_string()));
        }
        if let Some(to) = self.to_date {
            cond = cond.add(rating::Column::RatingDate.lte(to.to_string()));
        }
        Ok(cond)
    }

    pub fn select(&self) -> AppResult<Select<rating::Entity>> {
        Ok(rating::Entity::find().filter(self.condition()?).order_by_asc(rating::Column::Id))
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    /// `None` means the caller asked for the whole sequence.
    pub fn resolve(&self, default_size: u64, max_size: u64) -> AppResult<Option<Page>> {
        if self.page.is_none() && self.page_size.is_none() {
            return Ok(None);
        }
        let page = self.page.unwrap_or(1);
        let size = self.page_size.unwrap_or(default_size).min(max_size);
        if page == 0 || size == 0 {
            return Err(AppError::Validation("page and page_size must be positive".into()));
        }
        let offset = (page - 1)
            .checked_mul(size)
            .filter(|offset| *offset <= i64::MAX as u64 && size <= i64::MAX as u64)
            .ok_or_else(|| AppError::Validation(format!("page {page} is out of range")))?;
        Ok(Some(Page { limit: size, offset }))
    }
}

pub fn paged<E: EntityTrait>(select: Select<E>, page: Option<Page>) -> Select<E> {
    match page {
        Some(page) => select.limit(page.limit).offset(page.offset),
        None => select,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingStats {
    pub average: Option<f64>,
    pub count: u64,
}

/// Mean and count of a movie's ratings. SQL `AVG` over no rows is `NULL`,
/// which comes back as `None` rather than a division by zero.
pub async fn rating_stats<C: ConnectionTrait>(db: &C, movie_id: i32) -> AppResult<RatingStats> {
    let scoped = rating::Entity::find().filter(rating::Column::MovieId.eq(movie_id));

    let average = scoped
        .clone()
        .select_only()
        .column_as(SimpleExpr::from(Func::avg(Expr::col(rating::Column::Rating))), "average")
        .into_tuple::<Option<f64>>()
        .one(db)
        .await?
        .flatten();

    let count = scoped.count(db).await?;

    Ok(RatingStats { average, count })
}

fn lower(col: impl ColumnTrait) -> Expr {
    Expr::expr(Func::lower(Expr::col(col)))
}

fn contains(needle: &str) -> LikeExpr {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}
