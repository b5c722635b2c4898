use crate::format::{long_date, short_date, website_href};

#[test]
fn long_date_uses_full_month_names() {
    assert_eq!(long_date("2015-01-05T00:00:00Z"), "January 5, 2015");
    assert_eq!(long_date("2011-01-25T18:44:36Z"), "January 25, 2011");
}

#[test]
fn short_date_abbreviates_the_month() {
    assert_eq!(short_date("2015-01-05T12:00:00Z"), "Jan 5, 2015");
    assert_eq!(short_date("2026-12-31T23:59:59Z"), "Dec 31, 2026");
}

#[test]
fn unparseable_timestamps_pass_through() {
    assert_eq!(long_date("not-a-date"), "not-a-date");
    assert_eq!(short_date(""), "");
}

#[test]
fn bare_hosts_get_an_https_prefix() {
    assert_eq!(website_href("example.com"), "https://example.com");
    assert_eq!(website_href("https://example.com"), "https://example.com");
    assert_eq!(website_href("http://example.com"), "http://example.com");
}
