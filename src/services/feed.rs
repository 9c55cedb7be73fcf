// src/services/feed.rs

//! Feed serialization service.
//!
//! Serializes an article list into RSS 2.0, Atom 1.0 or JSON Feed text.
//! The same article list is serialized once per format; output files carry
//! no extension (`rss`, `atom`, `json`).

use atom_syndication as atom;
use chrono::{DateTime, Utc};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Article, Site};

/// Target serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl FeedFormat {
    /// All formats, in the order their files are written.
    pub const ALL: [FeedFormat; 3] = [FeedFormat::Rss, FeedFormat::Atom, FeedFormat::Json];

    /// File name of this format under the site's feed directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            FeedFormat::Rss => "rss",
            FeedFormat::Atom => "atom",
            FeedFormat::Json => "json",
        }
    }
}

/// Metadata describing one site's feed.
#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl FeedMeta {
    /// Build the feed metadata for a site.
    ///
    /// The long name is preferred over the short name when present.
    pub fn for_site(site: &Site) -> Self {
        let name = site.display_name();
        Self {
            title: format!("{name} 공지사항"),
            link: site.url.clone(),
            description: format!("{name}의 공지사항입니다"),
        }
    }
}

/// Serialize the article list in the requested format.
pub fn generate_feed(meta: &FeedMeta, articles: &[Article], format: FeedFormat) -> Result<String> {
    match format {
        FeedFormat::Rss => Ok(generate_rss(meta, articles)),
        FeedFormat::Atom => Ok(generate_atom(meta, articles)),
        FeedFormat::Json => generate_json(meta, articles),
    }
}

fn generate_rss(meta: &FeedMeta, articles: &[Article]) -> String {
    let items = articles
        .iter()
        .map(|article| {
            ItemBuilder::default()
                .title(Some(article.title.clone()))
                .link(Some(article.link.clone()))
                .guid(Some(
                    GuidBuilder::default()
                        .value(article.link.clone())
                        .permalink(true)
                        .build(),
                ))
                .description((!article.summary.is_empty()).then(|| article.summary.clone()))
                .author(article.author.clone())
                .pub_date(Some(article.date.to_rfc2822()))
                .build()
        })
        .collect::<Vec<_>>();

    let channel = ChannelBuilder::default()
        .title(meta.title.clone())
        .link(meta.link.clone())
        .description(meta.description.clone())
        .items(items)
        .build();

    channel.to_string()
}

fn generate_atom(meta: &FeedMeta, articles: &[Article]) -> String {
    let entries = articles
        .iter()
        .map(|article| {
            let mut entry = atom::Entry::default();
            entry.set_title(atom::Text::plain(article.title.clone()));
            entry.set_id(article.link.clone());
            entry.set_updated(article.date.fixed_offset());
            entry.set_published(Some(article.date.fixed_offset()));

            let mut link = atom::Link::default();
            link.set_href(article.link.clone());
            entry.set_links(vec![link]);

            if let Some(author) = &article.author {
                let mut person = atom::Person::default();
                person.set_name(author.clone());
                entry.set_authors(vec![person]);
            }
            if !article.summary.is_empty() {
                entry.set_summary(Some(atom::Text::plain(article.summary.clone())));
            }
            entry
        })
        .collect::<Vec<_>>();

    let updated = articles
        .iter()
        .map(|a| a.date)
        .max()
        .unwrap_or_else(Utc::now);

    let mut link = atom::Link::default();
    link.set_href(meta.link.clone());

    let mut feed = atom::Feed::default();
    feed.set_title(atom::Text::plain(meta.title.clone()));
    feed.set_id(meta.link.clone());
    feed.set_subtitle(Some(atom::Text::plain(meta.description.clone())));
    feed.set_updated(updated.fixed_offset());
    feed.set_links(vec![link]);
    feed.set_entries(entries);

    feed.to_string()
}

fn generate_json(meta: &FeedMeta, articles: &[Article]) -> Result<String> {
    let feed = JsonFeed {
        version: "https://jsonfeed.org/version/1",
        title: &meta.title,
        home_page_url: &meta.link,
        description: &meta.description,
        items: articles.iter().map(JsonFeedItem::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&feed)?)
}

/// JSON Feed v1 document.
#[derive(Debug, Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    description: &'a str,
    items: Vec<JsonFeedItem<'a>>,
}

/// One JSON Feed item.
#[derive(Debug, Serialize)]
struct JsonFeedItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonFeedAuthor<'a>>,
    date_published: DateTime<Utc>,
}

/// Item author, serialized only when the board exposes one.
#[derive(Debug, Serialize)]
struct JsonFeedAuthor<'a> {
    name: &'a str,
}

impl<'a> From<&'a Article> for JsonFeedItem<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            id: &article.link,
            url: &article.link,
            title: &article.title,
            summary: (!article.summary.is_empty()).then_some(article.summary.as_str()),
            author: article
                .author
                .as_deref()
                .map(|name| JsonFeedAuthor { name }),
            date_published: article.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteSelectors;
    use chrono::TimeZone;

    fn site(name: &str, long_name: Option<&str>) -> Site {
        Site {
            key: "dormitory/seoul/bluemir".to_string(),
            name: name.to_string(),
            long_name: long_name.map(str::to_string),
            url: "https://dormitory.cau.ac.kr/bluemir/notice/notice.htm".to_string(),
            board_url: None,
            selectors: SiteSelectors::default(),
        }
    }

    fn articles() -> Vec<Article> {
        vec![Article {
            title: "입사 신청 안내".to_string(),
            link: "https://dormitory.cau.ac.kr/bluemir/notice/view.htm?seq=1".to_string(),
            date: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            author: Some("관리자".to_string()),
            summary: String::new(),
        }]
    }

    #[test]
    fn test_meta_title_uses_short_name() {
        let meta = FeedMeta::for_site(&site("A", None));
        assert_eq!(meta.title, "A 공지사항");
        assert_eq!(meta.description, "A의 공지사항입니다");
    }

    #[test]
    fn test_meta_title_prefers_long_name() {
        let meta = FeedMeta::for_site(&site("A", Some("B Hall")));
        assert_eq!(meta.title, "B Hall 공지사항");
        assert_eq!(meta.description, "B Hall의 공지사항입니다");
    }

    #[test]
    fn test_all_formats_produce_nonempty_output() {
        let meta = FeedMeta::for_site(&site("블루미르홀", None));
        for format in FeedFormat::ALL {
            let text = generate_feed(&meta, &articles(), format).unwrap();
            assert!(!text.is_empty(), "{:?} output is empty", format);
            assert!(text.contains("입사 신청 안내"));
        }
    }

    #[test]
    fn test_rss_contains_channel_metadata() {
        let meta = FeedMeta::for_site(&site("블루미르홀", None));
        let text = generate_feed(&meta, &articles(), FeedFormat::Rss).unwrap();
        assert!(text.contains("<title>블루미르홀 공지사항</title>"));
        assert!(text.contains("블루미르홀의 공지사항입니다"));
    }

    #[test]
    fn test_json_feed_shape() {
        let meta = FeedMeta::for_site(&site("블루미르홀", None));
        let text = generate_feed(&meta, &articles(), FeedFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], "https://jsonfeed.org/version/1");
        assert_eq!(value["items"][0]["author"]["name"], "관리자");
        assert!(value["items"][0].get("summary").is_none());
    }

    #[test]
    fn test_empty_article_list_still_serializes() {
        let meta = FeedMeta::for_site(&site("서울캠퍼스 기숙사", None));
        for format in FeedFormat::ALL {
            assert!(!generate_feed(&meta, &[], format).unwrap().is_empty());
        }
    }
}
