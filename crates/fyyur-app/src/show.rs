use axum::{
    response::{Html, Redirect},
    routing::get,
};
use axum_extra::extract::Form;
use fyyur_dal::{
    artist::ArtistRepository,
    schedule::current_time,
    show::{CreateShow, ShowRepository},
    venue::VenueRepository,
};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    notice::Notices,
    pages::{self, forms, Page, Section},
    state::AppState,
    validate::Garde,
};

async fn list_shows(page: Page, repository: ShowRepository) -> ApiResult<Html<String>> {
    let shows = repository.list().await?;
    Ok(page
        .render("Shows", Section::Shows, &pages::show::listing(&shows))
        .await)
}

async fn create_show_form(
    page: Page,
    artists: ArtistRepository,
    venues: VenueRepository,
) -> ApiResult<Html<String>> {
    let artists = artists.list_all().await?;
    let venues = venues.list_all().await?;
    Ok(page
        .render(
            "New show",
            Section::Shows,
            &forms::show_form(&artists, &venues, current_time()),
        )
        .await)
}

async fn create_show(
    notices: Notices,
    repository: ShowRepository,
    Garde(Form(payload)): Garde<Form<CreateShow>>,
) -> ApiResult<Redirect> {
    let show = repository
        .create(payload)
        .await
        .map_err(|e| ApiError::failed(e, "An error occurred. Show could not be listed."))?;
    debug!("Show listed as {}", show.id);
    notices.success("Show was successfully listed!").await;
    Ok(Redirect::to("/"))
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(list_shows))
        .route("/create", get(create_show_form).post(create_show))
}
