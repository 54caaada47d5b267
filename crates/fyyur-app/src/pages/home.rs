pub fn home(venues: u64, artists: u64, shows: u64) -> String {
    format!(
        r#"<h1>Fyyur 🤘</h1>
<p class="subtitle">Connect live music venues with talented artists.</p>
<ul class="items">
    <li><a href="/venues">{venues} venues</a> · <a href="/venues/create">List a new venue</a></li>
    <li><a href="/artists">{artists} artists</a> · <a href="/artists/create">List a new artist</a></li>
    <li><a href="/shows">{shows} shows</a> · <a href="/shows/create">List a new show</a></li>
</ul>"#
    )
}
