// src/services/crawler.rs

//! Article crawler service.
//!
//! Fetches announcements from site listing pages using configured CSS
//! selectors. One attempt per site, no retry.

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Article, CrawlerConfig, Site};
use crate::utils::{http, parse_date, resolve_url};

/// Source of articles for a configured site.
///
/// The pipeline only depends on this trait, so crawl orchestration can be
/// tested against a stub source.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the articles for one site, newest first as listed on the page.
    async fn fetch_articles(&self, site: &Site) -> Result<Vec<Article>>;
}

/// HTTP-backed article source scraping the configured boards.
pub struct ArticleCrawler {
    client: reqwest::Client,
}

impl ArticleCrawler {
    /// Create a new crawler with the given configuration.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = http::create_client(config)?;
        Ok(Self { client })
    }

    /// Parse a fetched listing page into articles.
    ///
    /// Rows without a parseable title or date are skipped; a page yielding
    /// zero articles is treated as a crawl failure since every configured
    /// board always carries announcements.
    fn parse_articles(&self, site: &Site, html: &str) -> Result<Vec<Article>> {
        let document = Html::parse_document(html);

        let row_sel = Self::parse_selector(&site.selectors.row_selector)?;
        let title_sel = Self::parse_selector(&site.selectors.title_selector)?;
        let date_sel = Self::parse_selector(&site.selectors.date_selector)?;
        let author_sel = site
            .selectors
            .author_selector
            .as_ref()
            .map(|s| Self::parse_selector(s))
            .transpose()?;
        let link_sel = site
            .selectors
            .link_selector
            .as_ref()
            .map(|s| Self::parse_selector(s))
            .transpose()?;

        let base_url = url::Url::parse(site.board_url())?;
        let mut articles = Vec::new();

        for row in document.select(&row_sel) {
            let Some(title_elem) = row.select(&title_sel).next() else {
                continue;
            };
            let Some(date_elem) = row.select(&date_sel).next() else {
                continue;
            };

            let title = normalize_whitespace(&title_elem.text().collect::<String>());
            if title.is_empty() {
                continue;
            }

            let Some(date) = parse_date(&date_elem.text().collect::<String>()) else {
                continue;
            };

            let author = author_sel
                .as_ref()
                .and_then(|sel| row.select(sel).next())
                .map(|el| normalize_whitespace(&el.text().collect::<String>()))
                .filter(|s| !s.is_empty());

            let link_elem = link_sel
                .as_ref()
                .and_then(|sel| row.select(sel).next())
                .unwrap_or(title_elem);
            let raw_link = link_elem
                .value()
                .attr(&site.selectors.attr_name)
                .unwrap_or("");
            let link = resolve_url(&base_url, raw_link);

            articles.push(Article {
                title,
                link,
                date,
                author,
                summary: String::new(),
            });
        }

        if articles.is_empty() {
            return Err(AppError::crawl(
                &site.key,
                "no articles parsed from listing page",
            ));
        }

        Ok(articles)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[async_trait]
impl ArticleSource for ArticleCrawler {
    async fn fetch_articles(&self, site: &Site) -> Result<Vec<Article>> {
        let html = http::fetch_text(&self.client, site.board_url()).await?;
        self.parse_articles(site, &html)
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
