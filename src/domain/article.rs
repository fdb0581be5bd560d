use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A blog post as returned by `GET /api/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub post_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub claps: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// Publish date as a short local date, or the raw value if it cannot be parsed.
    pub fn display_date(&self) -> String {
        format_local_date(&self.published_date)
    }
}

/// Render an RFC 3339, RFC 2822 or `YYYY-MM-DD` timestamp as `M/D/YYYY` in
/// local time.
pub fn format_local_date(raw: &str) -> String {
    const FORMAT: &str = "%-m/%-d/%Y";

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.with_timezone(&Local).format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    raw.to_string()
}
