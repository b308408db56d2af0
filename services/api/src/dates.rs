//! Calendar date parsing and rendering

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendered form of every date the API returns, e.g. `Sun Jan 15 2023`
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Render a date the way log entries are returned to clients
pub fn to_date_string(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a client supplied date.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`
/// timestamp, or the rendered `Www Mmm dd yyyy` form. Returns `None` for
/// anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, DISPLAY_FORMAT).ok())
}
