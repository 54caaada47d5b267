use fyyur_dal::show::ShowListing;

use super::{
    esc,
    filters::{format_datetime, DateFormat},
    image_html,
};

pub fn listing(shows: &[ShowListing]) -> String {
    let cards: String = shows
        .iter()
        .map(|s| {
            format!(
                r#"<div class="show">{}
<h4>{}</h4>
<h5><a href="/artists/{}">{}</a></h5>
<p>playing at</p>
<h5><a href="/venues/{}">{}</a></h5>
</div>"#,
                image_html(s.artist_image_link.as_deref(), &s.artist_name),
                format_datetime(s.start_time, DateFormat::Medium),
                s.artist_id,
                esc(&s.artist_name),
                s.venue_id,
                esc(&s.venue_name)
            )
        })
        .collect();
    format!(
        r#"<h1>Shows</h1>
<p><a href="/shows/create">List a new show</a></p>
{cards}"#
    )
}
