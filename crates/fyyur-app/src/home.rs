use axum::{response::Html, routing::get};
use fyyur_dal::{artist::ArtistRepository, show::ShowRepository, venue::VenueRepository};

use crate::{
    error::ApiResult,
    pages::{self, Page, Section},
    state::AppState,
};

async fn home(
    page: Page,
    venues: VenueRepository,
    artists: ArtistRepository,
    shows: ShowRepository,
) -> ApiResult<Html<String>> {
    let content = pages::home::home(
        venues.count().await?,
        artists.count().await?,
        shows.count().await?,
    );
    Ok(page.render("Home", Section::Home, &content).await)
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/", get(home))
}
