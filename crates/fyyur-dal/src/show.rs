use fyyur_types::form::datetime;
use futures::TryStreamExt as _;
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::{Acquire, Executor, Pool};
use time::PrimitiveDateTime;
use tracing::debug;

use crate::{ChosenDB, Error, error::Result};

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateShow {
    #[garde(range(min = 1))]
    pub artist_id: i64,
    #[garde(range(min = 1))]
    pub venue_id: i64,
    #[serde(deserialize_with = "datetime")]
    #[garde(skip)]
    pub start_time: PrimitiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: PrimitiveDateTime,
}

/// Show joined with the names of both sides, as listed on the shows page.
#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

pub type ShowRepository = ShowRepositoryImpl<Pool<ChosenDB>>;

pub struct ShowRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> ShowRepositoryImpl<E>
where
    for<'a> &'a E: Executor<'c, Database = ChosenDB> + Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Fails with [`Error::ConstraintViolation`] when artist or venue does not exist.
    pub async fn create(&self, payload: CreateShow) -> Result<Show> {
        let mut tx = self.executor.begin().await?;
        let result =
            sqlx::query("INSERT INTO show (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
                .bind(payload.artist_id)
                .bind(payload.venue_id)
                .bind(payload.start_time)
                .execute(&mut *tx)
                .await?;

        let id = result.last_insert_rowid();
        let record = sqlx::query_as::<_, Show>("SELECT * FROM show WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::not_found("Show", id))?;
        tx.commit().await?;
        debug!(
            "Created show {id} of artist {} at venue {}",
            record.artist_id, record.venue_id
        );
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<ShowListing>> {
        let records = sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
            a.image_link AS artist_image_link, s.start_time
            FROM show s
            JOIN venue v ON s.venue_id = v.id
            JOIN artist a ON s.artist_id = a.id
            ORDER BY s.start_time, s.id",
        )
        .fetch(&self.executor)
        .try_collect::<Vec<_>>()
        .await?;
        Ok(records)
    }

    pub async fn count(&self) -> Result<u64> {
        let count: u64 = sqlx::query_scalar("SELECT count(*) FROM show")
            .fetch_one(&self.executor)
            .await?;
        Ok(count)
    }
}
