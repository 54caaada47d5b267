use anyhow::bail;
use clap::Parser;
use fyyur_dal::{
    artist::{ArtistRepository, CreateArtist},
    show::{CreateShow, ShowRepository},
    venue::{CreateVenue, VenueRepository},
    Pool,
};
use fyyur_types::config::BackendConfig;
use time::macros::datetime;
use tracing::{debug, info};

use crate::commands::{open_pool, Executor};

#[derive(Parser, Debug)]
pub struct SeedCmd {
    #[command(flatten)]
    backend: BackendConfig,
}

impl Executor for SeedCmd {
    async fn run(self) -> anyhow::Result<()> {
        let pool = open_pool(&self.backend).await?;
        fyyur_dal::migrate(&pool).await?;
        let (venues, artists, shows) = seed(&pool).await?;
        info!("Seeded {venues} venues, {artists} artists and {shows} shows");
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn demo_venues() -> Vec<CreateVenue> {
    vec![
        CreateVenue {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: some("123-123-1234"),
            genres: strings(&["Jazz", "Reggae", "Classical", "Folk"]),
            image_link: some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400"),
            website_link: some("https://www.themusicalhop.com"),
            facebook_link: some("https://www.facebook.com/TheMusicalHop"),
            seeking_talent: true,
            seeking_description: some(
                "We are on the lookout for a local artist to play every two weeks. Please call us.",
            ),
        },
        CreateVenue {
            name: "The Dueling Pianos Bar".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "335 Delancey Street".into(),
            phone: some("914-003-1132"),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            image_link: some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750"),
            website_link: some("https://www.theduelingpianos.com"),
            facebook_link: some("https://www.facebook.com/theduelingpianos"),
            seeking_talent: false,
            seeking_description: None,
        },
        CreateVenue {
            name: "Park Square Live Music & Coffee".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "34 Whiskey Moore Ave".into(),
            phone: some("415-000-1234"),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            image_link: some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747"),
            website_link: some("https://www.parksquarelivemusicandcoffee.com"),
            facebook_link: some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee"),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn demo_artists() -> Vec<CreateArtist> {
    vec![
        CreateArtist {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: some("326-123-5000"),
            genres: strings(&["Rock n Roll"]),
            image_link: some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300"),
            website_link: some("https://www.gunsnpetalsband.com"),
            facebook_link: some("https://www.facebook.com/GunsNPetals"),
            seeking_venue: true,
            seeking_description: some(
                "Looking for shows to perform at in the San Francisco Bay Area!",
            ),
        },
        CreateArtist {
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: some("300-400-5000"),
            genres: strings(&["Jazz"]),
            image_link: some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334"),
            website_link: None,
            facebook_link: some("https://www.facebook.com/mattquevedo923251523"),
            seeking_venue: false,
            seeking_description: None,
        },
        CreateArtist {
            name: "The Wild Sax Band".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: some("432-325-5432"),
            genres: strings(&["Jazz", "Classical"]),
            image_link: some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794"),
            website_link: None,
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

/// Inserts the demo listings, refuses to touch a database that already lists anything.
pub async fn seed(pool: &Pool) -> anyhow::Result<(usize, usize, usize)> {
    let venue_repo = VenueRepository::new(pool.clone());
    let artist_repo = ArtistRepository::new(pool.clone());
    let show_repo = ShowRepository::new(pool.clone());

    if venue_repo.count().await? > 0
        || artist_repo.count().await? > 0
        || show_repo.count().await? > 0
    {
        bail!("Database already contains listings, refusing to seed");
    }

    let mut venues = Vec::new();
    for payload in demo_venues() {
        let venue = venue_repo.create(payload).await?;
        debug!("Created venue {} ({})", venue.name, venue.id);
        venues.push(venue.id);
    }
    let mut artists = Vec::new();
    for payload in demo_artists() {
        let artist = artist_repo.create(payload).await?;
        debug!("Created artist {} ({})", artist.name, artist.id);
        artists.push(artist.id);
    }

    // (artist, venue, start)
    let shows = [
        (artists[0], venues[0], datetime!(2019-05-21 21:30:00)),
        (artists[1], venues[2], datetime!(2019-06-15 23:00:00)),
        (artists[2], venues[2], datetime!(2035-04-01 20:00:00)),
        (artists[2], venues[2], datetime!(2035-04-08 20:00:00)),
        (artists[2], venues[2], datetime!(2035-04-15 20:00:00)),
    ];
    for (artist_id, venue_id, start_time) in shows {
        show_repo
            .create(CreateShow {
                artist_id,
                venue_id,
                start_time,
            })
            .await?;
    }

    Ok((venues.len(), artists.len(), shows.len()))
}
