pub mod artist;
pub mod error;
pub mod schedule;
pub mod show;
pub mod venue;

use std::{str::FromStr as _, time::Duration};

pub use error::Error;
use serde::Serialize;
pub use sqlx::Error as SqlxError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::Result;

pub type ChosenDB = sqlx::Sqlite;
pub type ChosenRow = sqlx::sqlite::SqliteRow;
pub type Pool = sqlx::Pool<ChosenDB>;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn new_pool(database_url: &str) -> Result<Pool, Error> {
    new_pool_with_timeout(database_url, DEFAULT_TIMEOUT).await
}

/// Every wait on the database (free connection, SQLite lock) is bounded by `timeout`.
pub async fn new_pool_with_timeout(database_url: &str, timeout: Duration) -> Result<Pool, Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(timeout);
    let pool = SqlitePoolOptions::new()
        .max_connections(50)
        .acquire_timeout(timeout)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &Pool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResult<T> {
    fn from(data: Vec<T>) -> Self {
        SearchResult {
            count: data.len(),
            data,
        }
    }
}

/// Case-insensitive substring match, the term is taken literally.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

pub(crate) fn join_genres(genres: &[String]) -> String {
    fyyur_types::choices::unique_genres(genres.iter().map(String::as_str)).join(",")
}

pub(crate) fn split_genres(genres: &str) -> Vec<String> {
    fyyur_types::choices::unique_genres(genres.split(',').map(str::trim))
}
