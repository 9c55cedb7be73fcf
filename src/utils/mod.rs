//! Utility functions and helpers.

pub mod http;
pub mod log;

use chrono::{DateTime, TimeZone, Utc};
use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Parse a board date string into a UTC datetime.
///
/// Boards format dates inconsistently ("2026-02-01", "2026.02.01",
/// "2026년 2월 1일", sometimes with trailing labels), so this extracts the
/// first year/month/day group instead of trying exact formats.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        regex::Regex::new(r"(\d{4})\s*[.\-/년]\s*(\d{1,2})\s*[.\-/월]\s*(\d{1,2})").unwrap()
    });

    let caps = pattern.captures(text)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;

    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}
