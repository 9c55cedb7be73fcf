// src/models/article.rs

//! Article data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One announcement fetched from a site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Announcement title
    pub title: String,

    /// Full URL to the announcement
    pub link: String,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Author, when the board exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Short summary or excerpt (empty when the board has none)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialization_skips_empty_fields() {
        let article = Article {
            title: "신입생 입사 안내".to_string(),
            link: "https://dormitory.cau.ac.kr/notice/1".to_string(),
            date: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            author: None,
            summary: String::new(),
        };

        let json = serde_json::to_string(&article).unwrap();
        assert!(!json.contains("author"));
        assert!(!json.contains("summary"));
    }
}
