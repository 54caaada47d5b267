use phf::phf_map;

/// Genres offered on venue and artist forms, in display order.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

static STATES: phf::Map<&'static str, &'static str> = phf_map! {
    "AL" => "Alabama",
    "AK" => "Alaska",
    "AZ" => "Arizona",
    "AR" => "Arkansas",
    "CA" => "California",
    "CO" => "Colorado",
    "CT" => "Connecticut",
    "DE" => "Delaware",
    "DC" => "District of Columbia",
    "FL" => "Florida",
    "GA" => "Georgia",
    "HI" => "Hawaii",
    "ID" => "Idaho",
    "IL" => "Illinois",
    "IN" => "Indiana",
    "IA" => "Iowa",
    "KS" => "Kansas",
    "KY" => "Kentucky",
    "LA" => "Louisiana",
    "ME" => "Maine",
    "MT" => "Montana",
    "NE" => "Nebraska",
    "NV" => "Nevada",
    "NH" => "New Hampshire",
    "NJ" => "New Jersey",
    "NM" => "New Mexico",
    "NY" => "New York",
    "NC" => "North Carolina",
    "ND" => "North Dakota",
    "OH" => "Ohio",
    "OK" => "Oklahoma",
    "OR" => "Oregon",
    "MD" => "Maryland",
    "MA" => "Massachusetts",
    "MI" => "Michigan",
    "MN" => "Minnesota",
    "MS" => "Mississippi",
    "MO" => "Missouri",
    "PA" => "Pennsylvania",
    "RI" => "Rhode Island",
    "SC" => "South Carolina",
    "SD" => "South Dakota",
    "TN" => "Tennessee",
    "TX" => "Texas",
    "UT" => "Utah",
    "VT" => "Vermont",
    "VA" => "Virginia",
    "WA" => "Washington",
    "WV" => "West Virginia",
    "WI" => "Wisconsin",
    "WY" => "Wyoming",
};

/// State codes with their names, sorted by code.
pub fn states() -> Vec<(&'static str, &'static str)> {
    let mut states: Vec<_> = STATES.entries().map(|(k, v)| (*k, *v)).collect();
    states.sort_unstable_by_key(|(code, _)| *code);
    states
}

pub fn state_name(code: &str) -> Option<&'static str> {
    STATES.get(code).copied()
}

pub fn is_valid_state(state: &str, _ctx: &()) -> garde::Result {
    if STATES.contains_key(state) {
        Ok(())
    } else {
        Err(garde::Error::new(format!("unknown state {state}")))
    }
}

pub fn is_valid_genre(genre: &str, _ctx: &()) -> garde::Result {
    if GENRES.contains(&genre) {
        Ok(())
    } else {
        Err(garde::Error::new(format!("unknown genre {genre}")))
    }
}

/// Genres are a set; keeps the first occurrence of each value.
pub fn unique_genres<I>(genres: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut res: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.into();
        if !genre.is_empty() && !res.contains(&genre) {
            res.push(genre);
        }
    }
    res
}
