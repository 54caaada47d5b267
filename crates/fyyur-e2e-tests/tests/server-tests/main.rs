mod server_artists;
mod server_health;
mod server_shows;
mod server_venues;
