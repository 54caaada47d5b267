use futures::TryStreamExt as _;
use fyyur_dal::{
    Error,
    artist::{ArtistRepositoryImpl, CreateArtist},
};
use sqlx::Executor;
use time::{PrimitiveDateTime, macros::datetime};

const NOW: PrimitiveDateTime = datetime!(2024-06-01 12:00:00);

const TEST_DATA: &str = r#"
INSERT INTO venue (id, name, city, state, address, genres, image_link)
VALUES (1, 'The Musical Hop', 'San Francisco', 'CA', '1015 Folsom Street', 'Jazz', 'https://example.com/hop.jpg');
INSERT INTO venue (id, name, city, state, address, genres)
VALUES (3, 'Park Square Live Music & Coffee', 'San Francisco', 'CA', '34 Whiskey Moore Ave', 'Folk');

INSERT INTO artist (id, name, city, state, phone, genres, seeking_venue, seeking_description)
VALUES (4, 'Guns N Petals', 'San Francisco', 'CA', '326-123-5000', 'Rock n Roll', TRUE, 'Looking for shows to perform at in the San Francisco Bay Area!');
INSERT INTO artist (id, name, city, state, genres, seeking_venue)
VALUES (5, 'Matt Quevedo', 'New York', 'NY', 'Jazz', FALSE);
INSERT INTO artist (id, name, city, state, genres, seeking_venue)
VALUES (6, 'The Wild Sax Band', 'San Francisco', 'CA', 'Jazz,Classical', FALSE);

INSERT INTO show (artist_id, venue_id, start_time) VALUES (6, 3, '2035-04-15 20:00:00');
INSERT INTO show (artist_id, venue_id, start_time) VALUES (6, 3, '2035-04-01 20:00:00');
INSERT INTO show (artist_id, venue_id, start_time) VALUES (6, 1, '2019-06-15 23:00:00');
INSERT INTO show (artist_id, venue_id, start_time) VALUES (4, 1, '2035-04-08 20:00:00');
"#;

async fn init_db() -> sqlx::Pool<sqlx::Sqlite> {
    const DB_URL: &str = "sqlite::memory:";
    let conn = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect(DB_URL)
        .await
        .unwrap();
    conn.execute("PRAGMA foreign_keys = ON").await.unwrap();
    fyyur_dal::migrate(&conn).await.unwrap();

    conn.execute_many(TEST_DATA)
        .try_collect::<Vec<_>>()
        .await
        .unwrap();

    conn
}

fn sample_artist() -> CreateArtist {
    CreateArtist {
        name: "Nina Simone Tribute".to_string(),
        city: "Tryon".to_string(),
        state: "NC".to_string(),
        phone: None,
        genres: vec!["Jazz".to_string(), "Soul".to_string(), "Jazz".to_string()],
        image_link: None,
        website_link: Some("https://example.com/nina".to_string()),
        facebook_link: Some("https://www.facebook.com/nina".to_string()),
        seeking_venue: false,
        seeking_description: None,
    }
}

#[tokio::test]
async fn test_artist_create_and_detail() {
    let conn = init_db().await;
    let repo = ArtistRepositoryImpl::new(conn);

    let payload = sample_artist();
    let created = repo.create(payload.clone()).await.unwrap();
    let detail = repo.detail(created.id, NOW).await.unwrap();
    assert_eq!(detail.artist, created);
    assert_eq!(detail.artist.name, payload.name);
    assert_eq!(detail.artist.city, payload.city);
    assert_eq!(detail.artist.state, payload.state);
    assert_eq!(detail.artist.phone, None);
    // duplicates are stored once
    assert_eq!(detail.artist.genres, vec!["Jazz", "Soul"]);
    assert_eq!(detail.artist.website_link, payload.website_link);
    assert_eq!(detail.artist.facebook_link, payload.facebook_link);
    assert!(!detail.artist.seeking_venue);
    assert_eq!(detail.past_shows_count + detail.upcoming_shows_count, 0);
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_artist_detail_partitions_shows() {
    let conn = init_db().await;
    let repo = ArtistRepositoryImpl::new(conn);

    let detail = repo.detail(6, NOW).await.unwrap();
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 2);
    assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
    assert_eq!(
        detail.past_shows[0].venue_image_link.as_deref(),
        Some("https://example.com/hop.jpg")
    );
    assert_eq!(
        detail.upcoming_shows[0].start_time,
        datetime!(2035-04-01 20:00:00)
    );
    assert_eq!(
        detail.upcoming_shows[1].start_time,
        datetime!(2035-04-15 20:00:00)
    );
    assert_eq!(detail.upcoming_shows[1].venue_id, 3);

    let detail = repo.detail(6, datetime!(2040-01-01 00:00:00)).await.unwrap();
    assert_eq!(detail.past_shows_count, 3);
    assert_eq!(detail.upcoming_shows_count, 0);

    let missing = repo.detail(1, NOW).await;
    assert!(matches!(missing, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_artist_search() {
    let conn = init_db().await;
    let repo = ArtistRepositoryImpl::new(conn);

    let res = repo.search("A", NOW).await.unwrap();
    assert_eq!(res.count, 3);
    let res = repo.search("band", NOW).await.unwrap();
    assert_eq!(res.count, 1);
    assert_eq!(res.data[0].id, 6);
    assert_eq!(res.data[0].num_upcoming_shows, 2);
    let res = repo.search("_", NOW).await.unwrap();
    assert_eq!(res.count, 0);
}

#[tokio::test]
async fn test_artist_update() {
    let conn = init_db().await;
    let repo = ArtistRepositoryImpl::new(conn);

    let other = repo.get(5).await.unwrap();
    let stored = CreateArtist::from(repo.get(4).await.unwrap());
    let payload = CreateArtist {
        genres: vec!["Jazz".to_string(), "Soul".to_string()],
        image_link: Some("https://example.com/nina.jpg".to_string()),
        ..sample_artist()
    };
    // every field changes, booleans included
    assert_ne!(stored.name, payload.name);
    assert_ne!(stored.city, payload.city);
    assert_ne!(stored.state, payload.state);
    assert_ne!(stored.phone, payload.phone);
    assert_ne!(stored.genres, payload.genres);
    assert_ne!(stored.image_link, payload.image_link);
    assert_ne!(stored.website_link, payload.website_link);
    assert_ne!(stored.facebook_link, payload.facebook_link);
    assert_ne!(stored.seeking_venue, payload.seeking_venue);
    assert_ne!(stored.seeking_description, payload.seeking_description);

    let updated = repo.update(4, payload.clone()).await.unwrap();
    assert_eq!(updated.id, 4);
    assert_eq!(CreateArtist::from(updated.clone()), payload);
    assert_eq!(repo.get(4).await.unwrap(), updated);
    assert_eq!(repo.get(5).await.unwrap(), other);

    let missing = repo.update(999, sample_artist()).await;
    assert!(matches!(missing, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_artist_list_all() {
    let conn = init_db().await;
    let repo = ArtistRepositoryImpl::new(conn);

    let all = repo.list_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]
    );
}
