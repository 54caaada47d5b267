use axum::{
    extract::Path,
    response::{Html, Redirect},
    routing::{get, post},
};
use axum_extra::extract::Form;
use fyyur_dal::{
    artist::{ArtistRepository, CreateArtist},
    schedule::current_time,
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

async fn list_artists(page: Page, repository: ArtistRepository) -> ApiResult<Html<String>> {
    let artists = repository.list_all().await?;
    Ok(page
        .render("Artists", Section::Artists, &pages::artist::listing(&artists))
        .await)
}

async fn search_artists(
    page: Page,
    repository: ArtistRepository,
    form: SearchForm,
) -> ApiResult<Html<String>> {
    let term = form.term();
    let results = repository.search(term, current_time()).await?;
    Ok(page
        .render(
            "Artist search",
            Section::Artists,
            &pages::artist::search_results(term, &results),
        )
        .await)
}

async fn show_artist(
    Path(id): Path<i64>,
    page: Page,
    repository: ArtistRepository,
) -> ApiResult<Html<String>> {
    let detail = repository.detail(id, current_time()).await?;
    Ok(page
        .render(
            &detail.artist.name,
            Section::Artists,
            &pages::artist::detail(&detail),
        )
        .await)
}

async fn create_artist_form(page: Page) -> Html<String> {
    page.render(
        "New artist",
        Section::Artists,
        &forms::artist_form("List a new artist", "/artists/create", None),
    )
    .await
}

async fn create_artist(
    notices: Notices,
    repository: ArtistRepository,
    Garde(Form(payload)): Garde<Form<CreateArtist>>,
) -> ApiResult<Redirect> {
    let name = payload.name.clone();
    let artist = repository.create(payload).await.map_err(|e| {
        ApiError::failed(e, format!("An error occurred. Artist {name} could not be listed."))
    })?;
    debug!("Artist {} listed as {}", artist.name, artist.id);
    notices
        .success(format!("Artist {name} was successfully listed!"))
        .await;
    Ok(Redirect::to("/"))
}

async fn edit_artist_form(
    Path(id): Path<i64>,
    page: Page,
    repository: ArtistRepository,
) -> ApiResult<Html<String>> {
    let artist = repository.get(id).await?;
    let title = format!("Edit artist {}", artist.name);
    let form = forms::artist_form(
        &title,
        &format!("/artists/{id}/edit"),
        Some(&CreateArtist::from(artist)),
    );
    Ok(page.render(&title, Section::Artists, &form).await)
}

async fn edit_artist(
    Path(id): Path<i64>,
    notices: Notices,
    repository: ArtistRepository,
    Garde(Form(payload)): Garde<Form<CreateArtist>>,
) -> ApiResult<Redirect> {
    let name = payload.name.clone();
    repository.update(id, payload).await.map_err(|e| {
        ApiError::failed(e, format!("An error occurred. Artist {name} could not be updated."))
    })?;
    notices
        .success(format!("Artist {name} was successfully updated!"))
        .await;
    Ok(Redirect::to(&format!("/artists/{id}")))
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(list_artists))
        .route("/search", post(search_artists))
        .route("/create", get(create_artist_form).post(create_artist))
        .route("/{id}", get(show_artist))
        .route("/{id}/edit", get(edit_artist_form).post(edit_artist))
}
