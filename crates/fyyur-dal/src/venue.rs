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
    ChosenDB, ChosenRow, SearchResult, Error,
    error::Result,
    join_genres, name_matches,
    schedule::{Timeline, tally_upcoming},
    split_genres,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[garde(allow_unvalidated)]
pub struct CreateVenue {
    #[garde(length(min = 1, max = 120))]
    pub name: String,
    #[garde(length(min = 1, max = 120))]
    pub city: String,
    #[garde(custom(is_valid_state))]
    pub state: String,
    #[garde(length(min = 1, max = 120))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[garde(length(max = 500))]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl sqlx::FromRow<'_, ChosenRow> for Venue {
    fn from_row(row: &ChosenRow) -> Result<Self, sqlx::Error> {
        Ok(Venue {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            genres: split_genres(row.try_get("genres")?),
            image_link: row.try_get("image_link")?,
            website_link: row.try_get("website_link")?,
            facebook_link: row.try_get("facebook_link")?,
            seeking_talent: row.try_get("seeking_talent")?,
            seeking_description: row.try_get("seeking_description")?,
        })
    }
}

impl From<Venue> for CreateVenue {
    fn from(venue: Venue) -> Self {
        CreateVenue {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            image_link: venue.image_link,
            website_link: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VenueShort {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl From<(i64, String, usize)> for VenueShort {
    fn from((id, name, num_upcoming_shows): (i64, String, usize)) -> Self {
        VenueShort {
            id,
            name,
            num_upcoming_shows,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct VenueName {
    pub id: i64,
    pub name: String,
}

/// Venues sharing exactly the same city and state.
#[derive(Debug, Serialize, Clone)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueShort>,
}

/// Show as seen from a venue page.
#[derive(Debug, Serialize, Clone, PartialEq, sqlx::FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

#[derive(Debug, Serialize, Clone)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    fn new(venue: Venue, shows: Vec<VenueShow>, now: PrimitiveDateTime) -> Self {
        let Timeline { past, upcoming } = Timeline::partition(shows, now, |s| s.start_time);
        VenueDetail {
            venue,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

const INSERT_SQL: &str = "INSERT INTO venue (name, city, state, address, phone, genres, image_link, website_link, facebook_link, seeking_talent, seeking_description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const UPDATE_SQL: &str = "UPDATE venue SET name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?, image_link = ?, website_link = ?, facebook_link = ?, seeking_talent = ?, seeking_description = ? WHERE id = ?";

pub type VenueRepository = VenueRepositoryImpl<Pool<ChosenDB>>;

pub struct VenueRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> VenueRepositoryImpl<E>
where
    for<'a> &'a E: Executor<'c, Database = ChosenDB> + Acquire<'c, Database = ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateVenue) -> Result<Venue> {
        let mut tx = self.executor.begin().await?;
        let result = sqlx::query(INSERT_SQL)
            .bind(&payload.name)
            .bind(&payload.city)
            .bind(&payload.state)
            .bind(&payload.address)
            .bind(&payload.phone)
            .bind(join_genres(&payload.genres))
            .bind(&payload.image_link)
            .bind(&payload.website_link)
            .bind(&payload.facebook_link)
            .bind(payload.seeking_talent)
            .bind(&payload.seeking_description)
            .execute(&mut *tx)
            .await?;

        let id = result.last_insert_rowid();
        let record = get(id, &mut *tx).await?;
        tx.commit().await?;
        debug!("Created venue {id}");
        Ok(record)
    }

    /// Overwrites all mutable fields of the venue.
    pub async fn update(&self, id: i64, payload: CreateVenue) -> Result<Venue> {
        let mut tx = self.executor.begin().await?;
        let result = sqlx::query(UPDATE_SQL)
            .bind(&payload.name)
            .bind(&payload.city)
            .bind(&payload.state)
            .bind(&payload.address)
            .bind(&payload.phone)
            .bind(join_genres(&payload.genres))
            .bind(&payload.image_link)
            .bind(&payload.website_link)
            .bind(&payload.facebook_link)
            .bind(payload.seeking_talent)
            .bind(&payload.seeking_description)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Venue", id));
        }
        let record = get(id, &mut *tx).await?;
        tx.commit().await?;
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.executor.begin().await?;
        let res = sqlx::query("DELETE FROM venue WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if res.rows_affected() == 0 {
            Err(Error::not_found("Venue", id))
        } else {
            tx.commit().await?;
            Ok(())
        }
    }

    pub async fn get(&self, id: i64) -> Result<Venue> {
        get(id, &self.executor).await
    }

    pub async fn detail(&self, id: i64, now: PrimitiveDateTime) -> Result<VenueDetail> {
        let venue = self.get(id).await?;
        let shows = sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
            FROM show s JOIN artist a ON s.artist_id = a.id
            WHERE s.venue_id = ? ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&self.executor)
        .await?;
        Ok(VenueDetail::new(venue, shows, now))
    }

    pub async fn count(&self) -> Result<u64> {
        let count: u64 = sqlx::query_scalar("SELECT count(*) FROM venue")
            .fetch_one(&self.executor)
            .await?;
        Ok(count)
    }

    pub async fn list_all(&self) -> Result<Vec<VenueName>> {
        let records = sqlx::query_as::<_, VenueName>("SELECT id, name FROM venue ORDER BY id")
            .fetch(&self.executor)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(records)
    }

    /// Venues grouped by literal (city, state); groups and venues in them keep insertion order.
    pub async fn list_by_area(&self, now: PrimitiveDateTime) -> Result<Vec<VenueArea>> {
        let rows: Vec<(i64, String, String, String, Option<PrimitiveDateTime>)> = sqlx::query_as(
            "SELECT v.id, v.name, v.city, v.state, s.start_time
            FROM venue v LEFT JOIN show s ON s.venue_id = v.id ORDER BY v.id",
        )
        .fetch_all(&self.executor)
        .await?;

        let mut areas: Vec<(String, String, Vec<i64>)> = Vec::new();
        for (id, _, city, state, _) in rows.iter() {
            match areas.iter_mut().find(|(c, s, _)| c == city && s == state) {
                Some((_, _, ids)) => {
                    if ids.last() != Some(id) {
                        ids.push(*id)
                    }
                }
                None => areas.push((city.clone(), state.clone(), vec![*id])),
            }
        }

        let venues: Vec<VenueShort> = tally_upcoming(
            rows.into_iter()
                .map(|(id, name, _, _, start_time)| (id, name, start_time)),
            now,
        )
        .into_iter()
        .map(VenueShort::from)
        .collect();

        let areas = areas
            .into_iter()
            .map(|(city, state, ids)| VenueArea {
                city,
                state,
                venues: venues
                    .iter()
                    .filter(|v| ids.contains(&v.id))
                    .cloned()
                    .collect(),
            })
            .collect();
        Ok(areas)
    }

    pub async fn search(
        &self,
        term: &str,
        now: PrimitiveDateTime,
    ) -> Result<SearchResult<VenueShort>> {
        let rows: Vec<(i64, String, Option<PrimitiveDateTime>)> = sqlx::query_as(
            "SELECT v.id, v.name, s.start_time
            FROM venue v LEFT JOIN show s ON s.venue_id = v.id ORDER BY v.id",
        )
        .fetch_all(&self.executor)
        .await?;

        let matches: Vec<VenueShort> = tally_upcoming(
            rows.into_iter().filter(|(_, name, _)| name_matches(name, term)),
            now,
        )
        .into_iter()
        .map(VenueShort::from)
        .collect();
        debug!("Venue search for {term:?} found {} records", matches.len());
        Ok(matches.into())
    }
}

async fn get<'c, E>(id: i64, executor: E) -> Result<Venue>
where
    E: Executor<'c, Database = ChosenDB>,
{
    sqlx::query_as::<_, Venue>("SELECT * FROM venue WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| Error::not_found("Venue", id))
}
