//! Core type definitions for the application

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Which part of the screen currently has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    SearchBox,
    SearchButton,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::SearchBox => ActiveSection::SearchButton,
            ActiveSection::SearchButton => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::SearchBox,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::SearchBox => ActiveSection::Results,
            ActiveSection::SearchButton => ActiveSection::SearchBox,
            ActiveSection::Results => ActiveSection::SearchButton,
        }
    }
}

/// One song as returned by the catalog.
///
/// Every field is optional on the wire. Nothing is validated: a field that is
/// missing or has an unusable type is left empty, and the card shows a blank.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub track_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub track_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub artist_name: Option<String>,
    #[serde(default, rename = "artworkUrl100", deserialize_with = "lenient_text")]
    pub artwork_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub primary_genre_name: Option<String>,
}

// Integers, whole floats and numeric strings all count as an id
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

// Scalars are shown as text; arrays and objects are dropped
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

impl SongRecord {
    pub fn title(&self) -> &str {
        self.track_name.as_deref().unwrap_or_default()
    }

    pub fn artist(&self) -> &str {
        self.artist_name.as_deref().unwrap_or_default()
    }

    pub fn artwork(&self) -> &str {
        self.artwork_url.as_deref().unwrap_or_default()
    }

    /// Year component of `releaseDate`, if it parses
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(parse_release_year)
    }
}

/// Parse the year out of a catalog release date.
///
/// Accepts RFC 3339 timestamps (`1999-11-02T00:00:00Z`), plain dates
/// (`1999-11-02`) and anything else that starts with a four digit year.
pub fn parse_release_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    let prefix = raw.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}
