use fyyur_dal::{
    artist::{ArtistName, CreateArtist},
    venue::{CreateVenue, VenueName},
};
use fyyur_types::choices::{states, GENRES};
use time::PrimitiveDateTime;

use super::{esc, filters::input_datetime};

fn text_input(name: &str, label: &str, value: Option<&str>, required: bool) -> String {
    let value = esc(value.unwrap_or_default());
    let required = if required { " required" } else { "" };
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}" maxlength="120"{required}>"#
    )
}

fn link_input(name: &str, label: &str, value: Option<&str>) -> String {
    let value = esc(value.unwrap_or_default());
    format!(
        r#"<label for="{name}">{label}</label>
<input type="url" id="{name}" name="{name}" value="{value}" maxlength="500">"#
    )
}

fn state_select(selected: Option<&str>) -> String {
    let options: String = states()
        .into_iter()
        .map(|(code, _)| {
            let sel = if Some(code) == selected { " selected" } else { "" };
            format!(r#"<option value="{code}"{sel}>{code}</option>"#)
        })
        .collect();
    format!(
        r#"<label for="state">State</label>
<select id="state" name="state" required>{options}</select>"#
    )
}

fn genres_select(selected: &[String]) -> String {
    let options: String = GENRES
        .iter()
        .map(|genre| {
            let sel = if selected.iter().any(|g| g == genre) {
                " selected"
            } else {
                ""
            };
            let genre = esc(genre);
            format!(r#"<option value="{genre}"{sel}>{genre}</option>"#)
        })
        .collect();
    format!(
        r#"<label for="genres">Genres <small>(Ctrl+Click to select multiple)</small></label>
<select id="genres" name="genres" multiple required>{options}</select>"#
    )
}

fn seeking(name: &str, label: &str, checked: bool, description: Option<&str>) -> String {
    let checked = if checked { " checked" } else { "" };
    let description = esc(description.unwrap_or_default());
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>
<label for="seeking_description">Seeking Description</label>
<textarea id="seeking_description" name="seeking_description" maxlength="500">{description}</textarea>"#
    )
}

fn form(title: &str, action: &str, fields: &[String], submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" class="form">
<h3>{}</h3>
{}
<p><input type="submit" value="{submit}"></p>
</form>"#,
        esc(title),
        fields.join("\n")
    )
}

pub fn venue_form(title: &str, action: &str, venue: Option<&CreateVenue>) -> String {
    let fields = [
        text_input("name", "Name", venue.map(|v| v.name.as_str()), true),
        text_input("city", "City", venue.map(|v| v.city.as_str()), true),
        state_select(venue.map(|v| v.state.as_str())),
        text_input("address", "Address", venue.map(|v| v.address.as_str()), true),
        text_input("phone", "Phone", venue.and_then(|v| v.phone.as_deref()), false),
        genres_select(venue.map(|v| v.genres.as_slice()).unwrap_or_default()),
        link_input("image_link", "Image Link", venue.and_then(|v| v.image_link.as_deref())),
        link_input("website_link", "Website Link", venue.and_then(|v| v.website_link.as_deref())),
        link_input("facebook_link", "Facebook Link", venue.and_then(|v| v.facebook_link.as_deref())),
        seeking(
            "seeking_talent",
            "Looking for Talent",
            venue.map(|v| v.seeking_talent).unwrap_or_default(),
            venue.and_then(|v| v.seeking_description.as_deref()),
        ),
    ];
    form(title, action, &fields, "Save Venue")
}

pub fn artist_form(title: &str, action: &str, artist: Option<&CreateArtist>) -> String {
    let fields = [
        text_input("name", "Name", artist.map(|a| a.name.as_str()), true),
        text_input("city", "City", artist.map(|a| a.city.as_str()), true),
        state_select(artist.map(|a| a.state.as_str())),
        text_input("phone", "Phone", artist.and_then(|a| a.phone.as_deref()), false),
        genres_select(artist.map(|a| a.genres.as_slice()).unwrap_or_default()),
        link_input("image_link", "Image Link", artist.and_then(|a| a.image_link.as_deref())),
        link_input("website_link", "Website Link", artist.and_then(|a| a.website_link.as_deref())),
        link_input("facebook_link", "Facebook Link", artist.and_then(|a| a.facebook_link.as_deref())),
        seeking(
            "seeking_venue",
            "Looking for Venues",
            artist.map(|a| a.seeking_venue).unwrap_or_default(),
            artist.and_then(|a| a.seeking_description.as_deref()),
        ),
    ];
    form(title, action, &fields, "Save Artist")
}

fn id_select(name: &str, label: &str, choices: impl Iterator<Item = (i64, String)>) -> String {
    let options: String = choices
        .map(|(id, name)| format!(r#"<option value="{id}">{}</option>"#, esc(&name)))
        .collect();
    format!(
        r#"<label for="{name}">{label}</label>
<select id="{name}" name="{name}" required>{options}</select>"#
    )
}

pub fn show_form(artists: &[ArtistName], venues: &[VenueName], now: PrimitiveDateTime) -> String {
    let fields = [
        id_select(
            "artist_id",
            "Artist",
            artists.iter().map(|a| (a.id, a.name.clone())),
        ),
        id_select(
            "venue_id",
            "Venue",
            venues.iter().map(|v| (v.id, v.name.clone())),
        ),
        format!(
            r#"<label for="start_time">Start Time</label>
<input type="datetime-local" id="start_time" name="start_time" value="{}" required>"#,
            input_datetime(now)
        ),
    ];
    form("List a new show", "/shows/create", &fields, "Create Show")
}
