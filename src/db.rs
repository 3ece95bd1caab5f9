use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

use crate::error::AppResult;

const PRAGMAS: &[&str] =
    &["PRAGMA foreign_keys=ON", "PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

pub async fn connect_and_migrate(options: ConnectOptions) -> AppResult<DatabaseConnection> {
    let db = Database::connect(options).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    info!("running migrations");
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url);
    options.max_connections(max_connections).min_connections(1).sqlx_logging(false);
    options
}
