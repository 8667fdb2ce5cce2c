use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Fixed selector enumerations
// ---------------------------------------------------------------------------

/// Categories offered in the selector. The remote data may contain other
/// category strings; those still render and remain matchable by year-only
/// filters, they are just not offered here.
pub const CATEGORIES: [&str; 6] = [
    "Physics",
    "Chemistry",
    "Peace",
    "Economics",
    "Literature",
    "Medicine",
];

/// Year range offered in the selector: `YEAR_MIN..YEAR_MAX` (upper exclusive).
pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2019;

// ---------------------------------------------------------------------------
// Wire envelope
// ---------------------------------------------------------------------------

/// Top-level response body of the prize endpoint.
///
/// ```json
/// { "prizes": [ { "year": "1901", "category": "physics", "laureates": [...] } ] }
/// ```
///
/// A missing `prizes` key is an empty collection, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrizeResponse {
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

// ---------------------------------------------------------------------------
// Prize – one award entry for a year/category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Prize {
    /// Raw year as delivered by the endpoint (string or number).
    /// Coerced to an integer only at comparison time.
    #[serde(default)]
    pub year: YearField,
    #[serde(default)]
    pub category: String,
    /// Absent on the wire for some entries (e.g. war years) → empty.
    #[serde(default)]
    pub laureates: Vec<Laureate>,
}

/// Year field as it appears on the wire. The endpoint serves strings
/// (`"1901"`) but numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl Default for YearField {
    fn default() -> Self {
        YearField::Text(String::new())
    }
}

impl YearField {
    /// Numeric coercion. A non-numeric text year yields `None`, which fails
    /// any year match without failing the pipeline.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            YearField::Number(n) => i32::try_from(*n).ok(),
            YearField::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearField::Number(n) => write!(f, "{n}"),
            YearField::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Laureate – one recipient occurrence within a prize
// ---------------------------------------------------------------------------

/// Identity is governed solely by `id`; two occurrences with the same id are
/// the same laureate even if the name fields differ or are missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Laureate {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

/// Accept `"42"` or `42` for the id field and normalize to a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
