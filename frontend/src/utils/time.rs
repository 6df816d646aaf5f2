use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::{Asia::Jakarta, Tz};

pub const APP_TIME_ZONE: Tz = Jakarta;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIME_ZONE)
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&APP_TIME_ZONE).date_naive());
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `12 Apr 2025`; unparseable input is shown as-is.
pub fn format_api_date(raw: &str) -> String {
    parse_api_date(raw)
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Value for an `<input type="date">`.
pub fn input_date(raw: &str) -> String {
    parse_api_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
