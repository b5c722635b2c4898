//! Display formatting for API timestamps and the profile website link.

use chrono::DateTime;

/// Long form used for the profile join date, e.g. "January 5, 2015".
///
/// Timestamps that fail to parse are passed through unchanged.
pub fn long_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Short form used for repository updated dates, e.g. "Jan 5, 2015".
pub fn short_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Link target for the profile website. Accounts often store a bare host
/// ("example.com"); those are treated as https so the link resolves.
pub fn website_href(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}
