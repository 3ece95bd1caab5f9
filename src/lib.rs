pub mod app;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod routes;
pub mod validation;
pub mod views;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppResult,
    query::{Page, Pagination},
    validation::MinAge,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DatabaseConnection) -> Self {
        Self { config, db }
    }

    pub fn page(&self, pagination: &Pagination) -> AppResult<Option<Page>> {
        pagination.resolve(self.config.default_page_size, self.config.max_page_size)
    }

    pub fn min_age(&self) -> MinAge {
        MinAge { years: self.config.min_actor_age }
    }
}
