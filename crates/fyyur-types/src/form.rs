//! Decoding helpers for values submitted by HTML forms.
//!
//! Browsers send every text input, even an untouched one, so optional values
//! arrive as empty strings and unchecked checkboxes do not arrive at all.
//! These functions are meant for `#[serde(deserialize_with = ...)]`.

use serde::{de, Deserialize, Deserializer};
use time::{macros::format_description, PrimitiveDateTime};

pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Checkbox value, use together with `#[serde(default)]` for the unchecked case.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => parse_flag(&s)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&s), &"checkbox value")),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "on" | "true" | "1" => Some(true),
        "" | "n" | "no" | "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn parse_datetime(value: &str) -> Option<PrimitiveDateTime> {
    let value = value.trim();
    let formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    formats
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(value, *format).ok())
}

/// Accepts `YYYY-MM-DD HH:MM:SS` as well as the `datetime-local` input format.
pub fn datetime<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_datetime(&value).ok_or_else(|| {
        de::Error::invalid_value(
            de::Unexpected::Str(&value),
            &"date and time as YYYY-MM-DD HH:MM:SS",
        )
    })
}
