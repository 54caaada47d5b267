use fyyur_dal::{
    artist::{ArtistDetail, ArtistName, ArtistShort, ArtistShow},
    SearchResult,
};

use super::{
    contact_html, esc, filters::{format_datetime, DateFormat}, genres_html, image_html,
    seeking_html, shows_heading, state_html, upcoming_label,
};

pub fn listing(artists: &[ArtistName]) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, esc(&a.name)))
        .collect();
    format!(
        r#"<h1>Artists</h1>
<p><a href="/artists/create">List a new artist</a></p>
<ul class="items">{items}</ul>"#
    )
}

pub fn search_results(search_term: &str, results: &SearchResult<ArtistShort>) -> String {
    let items: String = results
        .data
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <span class="subtitle">{}</span></li>"#,
                a.id,
                esc(&a.name),
                upcoming_label(a.num_upcoming_shows)
            )
        })
        .collect();
    format!(
        r#"<h2>Number of search results for "{}": {}</h2>
<ul class="items">{items}</ul>"#,
        esc(search_term),
        results.count
    )
}

fn show_cards(shows: &[ArtistShow]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<div class="show">{}
<h5><a href="/venues/{}">{}</a></h5>
<h6>{}</h6></div>"#,
                image_html(s.venue_image_link.as_deref(), &s.venue_name),
                s.venue_id,
                esc(&s.venue_name),
                format_datetime(s.start_time, DateFormat::Full)
            )
        })
        .collect()
}

pub fn detail(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let contact = contact_html(
        artist.phone.as_deref(),
        &[
            ("Website", artist.website_link.as_deref()),
            ("Facebook", artist.facebook_link.as_deref()),
        ],
    );
    format!(
        r#"<div class="profile">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>📍 {city}, {state}</p>
{contact}
{seeking}
{image}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
</div>
<section>
{past_heading}
{past}
</section>
<section>
{upcoming_heading}
{upcoming}
</section>"#,
        name = esc(&artist.name),
        id = artist.id,
        genres = genres_html(&artist.genres),
        city = esc(&artist.city),
        state = state_html(&artist.state),
        seeking = seeking_html(
            artist.seeking_venue,
            "performance venues",
            artist.seeking_description.as_deref()
        ),
        image = image_html(artist.image_link.as_deref(), &artist.name),
        past_heading = shows_heading(detail.past_shows_count, "Past"),
        past = show_cards(&detail.past_shows),
        upcoming_heading = shows_heading(detail.upcoming_shows_count, "Upcoming"),
        upcoming = show_cards(&detail.upcoming_shows),
    )
}
