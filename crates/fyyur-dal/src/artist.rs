use fyyur_types::{
    form::{checkbox, empty_as_none},
    is_valid_genre, is_valid_state,
};
use futures::TryStreamExt as _;
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::{Acquire, Executor, Pool, Row as _};
use time::PrimitiveDateTime;
use tracing::debug;

use crate::{
    ChosenDB, ChosenRow, Error, SearchResult,
    error::Result,
    join_genres, name_matches,
    schedule::{Timeline, tally_upcoming},
    split_genres,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[garde(allow_unvalidated)]
pub struct CreateArtist {
    #[garde(length(min = 1, max = 120))]
    pub name: String,
    #[garde(length(min = 1, max = 120))]
    pub city: String,
    #[garde(custom(is_valid_state))]
    pub state: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default, alias = "genres[]")]
    #[garde(length(min = 1), inner(custom(is_valid_genre)))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(url, length(max = 500))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(url, length(max = 500))]
    pub website_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(url, length(max = 500))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(length(max = 500))]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl sqlx::FromRow<'_, ChosenRow> for Artist {
    fn from_row(row: &ChosenRow) -> Result<Self, sqlx::Error> {
        Ok(Artist {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            phone: row.try_get("phone")?,
            genres: split_genres(row.try_get("genres")?),
            image_link: row.try_get("image_link")?,
            website_link: row.try_get("website_link")?,
            facebook_link: row.try_get("facebook_link")?,
            seeking_venue: row.try_get("seeking_venue")?,
            seeking_description: row.try_get("seeking_description")?,
        })
    }
}

impl From<Artist> for CreateArtist {
    fn from(artist: Artist) -> Self {
        CreateArtist {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            website_link: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArtistShort {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl From<(i64, String, usize)> for ArtistShort {
    fn from((id, name, num_upcoming_shows): (i64, String, usize)) -> Self {
        ArtistShort {
            id,
            name,
            num_upcoming_shows,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct ArtistName {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

#[derive(Debug, Serialize, Clone)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    fn new(artist: Artist, shows: Vec<ArtistShow>, now: PrimitiveDateTime) -> Self {
        let Timeline { past, upcoming } = Timeline::partition(shows, now, |s| s.start_time);
        ArtistDetail {
            artist,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

const INSERT_SQL: &str = "INSERT INTO artist (name, city, state, phone, genres, image_link, website_link, facebook_link, seeking_venue, seeking_description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const UPDATE_SQL: &str = "UPDATE artist SET name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?, website_link = ?, facebook_link = ?, seeking_venue = ?, seeking_description = ? WHERE id = ?";

pub type ArtistRepository = ArtistRepositoryImpl<Pool<ChosenDB>>;

pub struct ArtistRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> ArtistRepositoryImpl<E>
where
    for<'a> &'a E: Executor<'c, Database = ChosenDB> + Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateArtist) -> Result<Artist> {
        let mut tx = self.executor.begin().await?;
        let result = sqlx::query(INSERT_SQL)
            .bind(&payload.name)
            .bind(&payload.city)
            .bind(&payload.state)
            .bind(&payload.phone)
            .bind(join_genres(&payload.genres))
            .bind(&payload.image_link)
            .bind(&payload.website_link)
            .bind(&payload.facebook_link)
            .bind(payload.seeking_venue)
            .bind(&payload.seeking_description)
            .execute(&mut *tx)
            .await?;

        let id = result.last_insert_rowid();
        let record = get(id, &mut *tx).await?;
        tx.commit().await?;
        debug!("Created artist {id}");
        Ok(record)
    }

    pub async fn update(&self, id: i64, payload: CreateArtist) -> Result<Artist> {
        let mut tx = self.executor.begin().await?;
        let result = sqlx::query(UPDATE_SQL)
            .bind(&payload.name)
            .bind(&payload.city)
            .bind(&payload.state)
            .bind(&payload.phone)
            .bind(join_genres(&payload.genres))
            .bind(&payload.image_link)
            .bind(&payload.website_link)
            .bind(&payload.facebook_link)
            .bind(payload.seeking_venue)
            .bind(&payload.seeking_description)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Artist", id));
        }
        let record = get(id, &mut *tx).await?;
        tx.commit().await?;
        Ok(record)
    }

    pub async fn get(&self, id: i64) -> Result<Artist> {
        get(id, &self.executor).await
    }

    pub async fn detail(&self, id: i64, now: PrimitiveDateTime) -> Result<ArtistDetail> {
        let artist = self.get(id).await?;
        let shows = sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
            FROM show s JOIN venue v ON s.venue_id = v.id
            WHERE s.artist_id = ? ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&self.executor)
        .await?;
        Ok(ArtistDetail::new(artist, shows, now))
    }

    pub async fn count(&self) -> Result<u64> {
        let count: u64 = sqlx::query_scalar("SELECT count(*) FROM artist")
            .fetch_one(&self.executor)
            .await?;
        Ok(count)
    }

    /// All artists as `(id, name)` in insertion order.
    pub async fn list_all(&self) -> Result<Vec<ArtistName>> {
        let records = sqlx::query_as::<_, ArtistName>("SELECT id, name FROM artist ORDER BY id")
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    pub async fn search(
        &self,
        term: &str,
        now: PrimitiveDateTime,
    ) -> Result<SearchResult<ArtistShort>> {
        let rows: Vec<(i64, String, Option<PrimitiveDateTime>)> = sqlx::query_as(
            "SELECT a.id, a.name, s.start_time
            FROM artist a LEFT JOIN show s ON s.artist_id = a.id ORDER BY a.id",
        )
        .fetch_all(&self.executor)
        .await?;

        let matches: Vec<ArtistShort> = tally_upcoming(
            rows.into_iter().filter(|(_, name, _)| name_matches(name, term)),
            now,
        )
        .into_iter()
        .map(ArtistShort::from)
        .collect();
        debug!("Artist search for {term:?} found {} records", matches.len());
        Ok(matches.into())
    }
}

async fn get<'c, E>(id: i64, executor: E) -> Result<Artist>
where
    E: Executor<'c, Database = ChosenDB>,
{
    sqlx::query_as::<_, Artist>("SELECT * FROM artist WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| Error::not_found("Artist", id))
}
