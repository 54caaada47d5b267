use axum::{
    extract::Path,
    response::{Html, Redirect},
    routing::{get, post},
};
use axum_extra::extract::Form;
use fyyur_dal::{
    schedule::current_time,
    venue::{CreateVenue, VenueRepository},
};
use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    notice::Notices,
    pages::{self, forms, Page, Section},
    state::AppState,
    validate::Garde,
    SearchForm,
};

async fn list_venues(page: Page, repository: VenueRepository) -> ApiResult<Html<String>> {
    let areas = repository.list_by_area(current_time()).await?;
    Ok(page
        .render("Venues", Section::Venues, &pages::venue::listing(&areas))
        .await)
}

async fn search_venues(
    page: Page,
    repository: VenueRepository,
    form: SearchForm,
) -> ApiResult<Html<String>> {
    let term = form.term();
    let results = repository.search(term, current_time()).await?;
    Ok(page
        .render(
            "Venue search",
            Section::Venues,
            &pages::venue::search_results(term, &results),
        )
        .await)
}

async fn show_venue(
    Path(id): Path<i64>,
    page: Page,
    repository: VenueRepository,
) -> ApiResult<Html<String>> {
    let detail = repository.detail(id, current_time()).await?;
    Ok(page
        .render(
            &detail.venue.name,
            Section::Venues,
            &pages::venue::detail(&detail),
        )
        .await)
}

async fn create_venue_form(page: Page) -> Html<String> {
    page.render(
        "New venue",
        Section::Venues,
        &forms::venue_form("List a new venue", "/venues/create", None),
    )
    .await
}

async fn create_venue(
    notices: Notices,
    repository: VenueRepository,
    Garde(Form(payload)): Garde<Form<CreateVenue>>,
) -> ApiResult<Redirect> {
    let name = payload.name.clone();
    let venue = repository.create(payload).await.map_err(|e| {
        ApiError::failed(e, format!("An error occurred. Venue {name} could not be listed."))
    })?;
    debug!("Venue {} listed as {}", venue.name, venue.id);
    notices
        .success(format!("Venue {name} was successfully listed!"))
        .await;
    Ok(Redirect::to("/"))
}

async fn edit_venue_form(
    Path(id): Path<i64>,
    page: Page,
    repository: VenueRepository,
) -> ApiResult<Html<String>> {
    let venue = repository.get(id).await?;
    let title = format!("Edit venue {}", venue.name);
    let form = forms::venue_form(
        &title,
        &format!("/venues/{id}/edit"),
        Some(&CreateVenue::from(venue)),
    );
    Ok(page.render(&title, Section::Venues, &form).await)
}

async fn edit_venue(
    Path(id): Path<i64>,
    notices: Notices,
    repository: VenueRepository,
    Garde(Form(payload)): Garde<Form<CreateVenue>>,
) -> ApiResult<Redirect> {
    let name = payload.name.clone();
    repository.update(id, payload).await.map_err(|e| {
        ApiError::failed(e, format!("An error occurred. Venue {name} could not be updated."))
    })?;
    notices
        .success(format!("Venue {name} was successfully updated!"))
        .await;
    Ok(Redirect::to(&format!("/venues/{id}")))
}

async fn delete_venue(
    Path(id): Path<i64>,
    notices: Notices,
    repository: VenueRepository,
) -> ApiResult<Redirect> {
    repository
        .delete(id)
        .await
        .map_err(|e| ApiError::failed(e, "Something went wrong! Venue is not deleted!"))?;
    notices.success("Venue successfully deleted!").await;
    Ok(Redirect::to("/"))
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(list_venues))
        .route("/search", post(search_venues))
        .route("/create", get(create_venue_form).post(create_venue))
        .route("/{id}", get(show_venue))
        .route("/{id}/edit", get(edit_venue_form).post(edit_venue))
        .route("/{id}/delete", post(delete_venue).delete(delete_venue))
}
