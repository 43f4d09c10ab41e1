//! Publication date parsing.

use chrono::NaiveDate;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%d %B %Y",  // 3 September 2025
    "%B %d, %Y", // September 3, 2025
    "%Y-%m-%d",  // 2025-09-03
];

/// Parse a date line in one of the accepted layouts.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Normalize a date line to `YYYY-MM-DD`, or hand it back unchanged when it
/// does not parse.
#[must_use]
pub fn normalize_date(text: &str) -> String {
    parse_date(text).map_or_else(
        || text.to_string(),
        |date| date.format("%Y-%m-%d").to_string(),
    )
}
