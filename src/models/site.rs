// src/models/site.rs

//! Site descriptors for the configured CAU websites.

use serde::{Deserialize, Serialize};

/// Key of the synthesized "all Seoul dormitories" aggregate site.
///
/// This site is never crawled directly; its articles are derived from the
/// member sites listed in [`AGGREGATE_MEMBER_KEYS`].
pub const AGGREGATE_KEY: &str = "dormitory/seoul/all";

/// Keys of the sites whose articles make up the aggregate feed.
pub const AGGREGATE_MEMBER_KEYS: [&str; 3] = [
    "dormitory/seoul/bluemir",
    "dormitory/seoul/future_house",
    "dormitory/seoul/global_house",
];

/// One configured announcement website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Hierarchical key (e.g. "dormitory/seoul/bluemir"), also the feed path segment
    pub key: String,

    /// Display name
    pub name: String,

    /// Optional long display name, preferred over `name` in feed metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Canonical URL of the site, used as the feed link
    pub url: String,

    /// URL of the announcement listing page fetched by the crawler
    /// (defaults to `url` when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_url: Option<String>,

    /// CSS selectors for scraping the listing page
    #[serde(default)]
    pub selectors: SiteSelectors,
}

impl Site {
    /// Name used in feed titles and descriptions: long name when present.
    pub fn display_name(&self) -> &str {
        match &self.long_name {
            Some(long_name) if !long_name.is_empty() => long_name,
            _ => &self.name,
        }
    }

    /// URL the crawler fetches for this site.
    pub fn board_url(&self) -> &str {
        self.board_url.as_deref().unwrap_or(&self.url)
    }

    /// Whether this is the aggregate placeholder (captured, never crawled).
    pub fn is_aggregate(&self) -> bool {
        self.key == AGGREGATE_KEY
    }
}

/// CSS selectors for scraping an announcement listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    /// Selector for each row/item in the announcement list
    pub row_selector: String,

    /// Selector for the title element within a row
    pub title_selector: String,

    /// Selector for the date element within a row
    pub date_selector: String,

    /// Selector for the author element within a row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_selector: Option<String>,

    /// Optional selector for the link element (if different from title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_selector: Option<String>,

    /// HTML attribute name for extracting links (usually "href")
    #[serde(default = "default_attr_name")]
    pub attr_name: String,
}

fn default_attr_name() -> String {
    "href".to_string()
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            row_selector: "table tr:has(a)".to_string(),
            title_selector: "a".to_string(),
            date_selector: "td:last-child".to_string(),
            author_selector: None,
            link_selector: None,
            attr_name: default_attr_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, long_name: Option<&str>) -> Site {
        Site {
            key: "cau".to_string(),
            name: name.to_string(),
            long_name: long_name.map(str::to_string),
            url: "https://www.cau.ac.kr".to_string(),
            board_url: None,
            selectors: SiteSelectors::default(),
        }
    }

    #[test]
    fn test_display_name_prefers_long_name() {
        assert_eq!(site("A", None).display_name(), "A");
        assert_eq!(site("A", Some("B Hall")).display_name(), "B Hall");
        assert_eq!(site("A", Some("")).display_name(), "A");
    }

    #[test]
    fn test_board_url_falls_back_to_url() {
        let mut s = site("A", None);
        assert_eq!(s.board_url(), "https://www.cau.ac.kr");
        s.board_url = Some("https://www.cau.ac.kr/notice".to_string());
        assert_eq!(s.board_url(), "https://www.cau.ac.kr/notice");
    }

    #[test]
    fn test_aggregate_detection() {
        let mut s = site("서울캠퍼스 기숙사", None);
        assert!(!s.is_aggregate());
        s.key = AGGREGATE_KEY.to_string();
        assert!(s.is_aggregate());
    }
}
