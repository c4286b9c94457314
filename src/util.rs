//! Utility functions for tpw

use chrono::{DateTime, NaiveDate};

/// Parses a content date.
///
/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps.
///
/// # Arguments
///
/// * `text`: Date string from an `info.json` file
///
/// # Returns
///
/// Calendar date, or `None` when the text is not a recognised date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

/// Formats a content date for display, like "May 1, 2024".
///
/// Text that does not parse as a date is returned unchanged.
pub fn format_date(text: &str) -> String {
    match parse_date(text) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => text.to_string(),
    }
}

/// Calculates how many directories deep a page sits below the site root.
///
/// # Arguments
///
/// * `page_path`: Site-relative page path such as `albums/album-001/index.html`
///
/// # Returns
///
/// Number of directory levels between the page and the site root
pub fn page_depth(page_path: &str) -> usize {
    page_path.matches('/').count()
}

/// Relative prefix leading from a page back to the site root.
pub fn root_prefix(page_path: &str) -> String {
    match page_depth(page_path) {
        0 => "./".to_string(),
        depth => "../".repeat(depth),
    }
}

/// Zero-pads a track sequence number to two digits.
pub fn pad_sequence(n: u32) -> String {
    format!("{:02}", n)
}
