pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_people_and_movies;
mod m20240101_000002_create_ratings_and_cast;
mod m20240101_000003_create_oscars;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_people_and_movies::Migration),
            Box::new(m20240101_000002_create_ratings_and_cast::Migration),
            Box::new(m20240101_000003_create_oscars::Migration),
        ]
    }
}
