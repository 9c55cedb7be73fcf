// src/models/outcome.rs

//! Per-run crawl outcome structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AGGREGATE_MEMBER_KEYS, Article, Site};

/// Successful crawl of one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSuccess {
    pub site_info: Site,
    pub articles: Vec<Article>,
    pub timestamp: DateTime<Utc>,
}

/// Failed crawl of one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlFailure {
    pub site_info: Site,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of a full crawl run.
///
/// Every configured site lands in exactly one of `success` or `failure`;
/// the aggregate placeholder is always appended to `success`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedData {
    pub success: Vec<CrawlSuccess>,
    pub failure: Vec<CrawlFailure>,
}

impl FeedData {
    /// Collect the articles for the aggregate feed.
    ///
    /// Concatenates the articles of the successes whose key is one of
    /// [`AGGREGATE_MEMBER_KEYS`] (in collection order) and sorts them by
    /// ascending date. `sort_by` is stable, so articles with equal dates
    /// keep their relative order from the concatenation.
    pub fn aggregate_articles(&self) -> Vec<Article> {
        let mut articles: Vec<Article> = self
            .success
            .iter()
            .filter(|item| {
                AGGREGATE_MEMBER_KEYS
                    .iter()
                    .any(|key| item.site_info.key == *key)
            })
            .flat_map(|item| item.articles.iter().cloned())
            .collect();

        articles.sort_by(|a, b| a.date.cmp(&b.date));
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteSelectors;
    use chrono::TimeZone;

    fn site(key: &str) -> Site {
        Site {
            key: key.to_string(),
            name: key.to_string(),
            long_name: None,
            url: format!("https://dormitory.cau.ac.kr/{key}"),
            board_url: None,
            selectors: SiteSelectors::default(),
        }
    }

    fn article(title: &str, day: u32) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://dormitory.cau.ac.kr/notice/{title}"),
            date: Utc.with_ymd_and_hms(2026, 2, day, 0, 0, 0).unwrap(),
            author: None,
            summary: String::new(),
        }
    }

    fn success(key: &str, articles: Vec<Article>) -> CrawlSuccess {
        CrawlSuccess {
            site_info: site(key),
            articles,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_aggregate_filters_member_sites() {
        let data = FeedData {
            success: vec![
                success("dormitory/seoul/bluemir", vec![article("a", 3)]),
                success("cau", vec![article("not-a-dormitory", 1)]),
                success("dormitory/seoul/global_house", vec![article("b", 2)]),
            ],
            failure: vec![],
        };

        let articles = data.aggregate_articles();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "b");
        assert_eq!(articles[1].title, "a");
    }

    #[test]
    fn test_aggregate_sort_is_stable_for_equal_dates() {
        let data = FeedData {
            success: vec![
                success(
                    "dormitory/seoul/bluemir",
                    vec![article("first", 1), article("second", 1)],
                ),
                success("dormitory/seoul/future_house", vec![article("third", 1)]),
            ],
            failure: vec![],
        };

        let titles: Vec<_> = data
            .aggregate_articles()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_aggregate_empty_when_no_members_succeeded() {
        let data = FeedData {
            success: vec![success("cau", vec![article("a", 1)])],
            failure: vec![CrawlFailure {
                site_info: site("dormitory/seoul/bluemir"),
                timestamp: Utc::now(),
            }],
        };

        assert!(data.aggregate_articles().is_empty());
    }
}
