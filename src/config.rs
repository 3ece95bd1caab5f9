use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub min_actor_age: i32,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://imdb.db?mode=rwc".to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
            min_actor_age: env_or("MIN_ACTOR_AGE", 5)?,
            default_page_size: env_or("DEFAULT_PAGE_SIZE", 50)?,
            max_page_size: env_or("MAX_PAGE_SIZE", 200)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            min_actor_age: 5,
            default_page_size: 50,
            max_page_size: 200,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().with_context(|| format!("{key}={raw}")),
        Err(_) => Ok(default),
    }
}
