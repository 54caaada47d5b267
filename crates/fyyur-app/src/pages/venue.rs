use fyyur_dal::{
    venue::{VenueArea, VenueDetail, VenueShort, VenueShow},
    SearchResult,
};

use super::{
    contact_html, esc, filters::{format_datetime, DateFormat}, genres_html, image_html,
    seeking_html, shows_heading, state_html, upcoming_label,
};

fn venue_items(venues: &[VenueShort]) -> String {
    venues
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="subtitle">{}</span></li>"#,
                v.id,
                esc(&v.name),
                upcoming_label(v.num_upcoming_shows)
            )
        })
        .collect()
}

pub fn listing(areas: &[VenueArea]) -> String {
    let groups: String = areas
        .iter()
        .map(|area| {
            format!(
                r#"<h3>{}, {}</h3>
<ul class="items">{}</ul>"#,
                esc(&area.city),
                esc(&area.state),
                venue_items(&area.venues)
            )
        })
        .collect();
    let empty = if areas.is_empty() {
        "<p>No venues are listed yet.</p>"
    } else {
        ""
    };
    format!(
        r#"<h1>Venues</h1>
<p><a href="/venues/create">List a new venue</a></p>
{groups}{empty}"#
    )
}

pub fn search_results(search_term: &str, results: &SearchResult<VenueShort>) -> String {
    format!(
        r#"<h2>Number of search results for "{}": {}</h2>
<ul class="items">{}</ul>"#,
        esc(search_term),
        results.count,
        venue_items(&results.data)
    )
}

fn show_cards(shows: &[VenueShow]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<div class="show">{}
<h5><a href="/artists/{}">{}</a></h5>
<h6>{}</h6></div>"#,
                image_html(s.artist_image_link.as_deref(), &s.artist_name),
                s.artist_id,
                esc(&s.artist_name),
                format_datetime(s.start_time, DateFormat::Full)
            )
        })
        .collect()
}

pub fn detail(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    format!(
        r#"<div class="profile">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>📍 {address}, {city}, {state}</p>
{contact}
{seeking}
{image}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
<form method="post" action="/venues/{id}/delete">
    <input type="submit" value="Delete venue">
</form>
</div>
<section>
{past_heading}
{past}
</section>
<section>
{upcoming_heading}
{upcoming}
</section>"#,
        name = esc(&venue.name),
        id = venue.id,
        genres = genres_html(&venue.genres),
        address = esc(&venue.address),
        city = esc(&venue.city),
        state = state_html(&venue.state),
        contact = contact_html(
            venue.phone.as_deref(),
            &[
                ("Website", venue.website_link.as_deref()),
                ("Facebook", venue.facebook_link.as_deref()),
            ]
        ),
        seeking = seeking_html(
            venue.seeking_talent,
            "talent",
            venue.seeking_description.as_deref()
        ),
        image = image_html(venue.image_link.as_deref(), &venue.name),
        past_heading = shows_heading(detail.past_shows_count, "Past"),
        past = show_cards(&detail.past_shows),
        upcoming_heading = shows_heading(detail.upcoming_shows_count, "Upcoming"),
        upcoming = show_cards(&detail.upcoming_shows),
    )
}
