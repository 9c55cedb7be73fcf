// src/pipeline/crawl.rs

//! Crawl orchestration.
//!
//! Visits every configured site once, in registry order, and partitions the
//! results into successes and failures. A failing site is recorded and
//! skipped; it never aborts the run.

use std::time::Duration;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, CrawlFailure, CrawlSuccess, FeedData};
use crate::services::ArticleSource;
use crate::utils::log;

/// Crawl all configured sites and synthesize the aggregate entry.
///
/// The aggregate placeholder is captured during iteration and appended to
/// the successes after the loop, with its article list derived from the
/// member sites' already-fetched successes.
pub async fn run_crawler(config: &Config, source: &dyn ArticleSource) -> Result<FeedData> {
    let delay = Duration::from_millis(config.crawler.request_delay_ms);
    let mut data = FeedData::default();
    let mut aggregate_site = None;

    for site in &config.sites {
        if site.is_aggregate() {
            aggregate_site = Some(site.clone());
            continue;
        }

        match source.fetch_articles(site).await {
            Ok(articles) => {
                log::sub_item(&format!("{}: {} articles", site.key, articles.len()));
                data.success.push(CrawlSuccess {
                    site_info: site.clone(),
                    articles,
                    timestamp: Utc::now(),
                });
            }
            Err(error) => {
                log::warn(&format!("Failed to crawl {}: {}", site.key, error));
                data.failure.push(CrawlFailure {
                    site_info: site.clone(),
                    timestamp: Utc::now(),
                });
            }
        }

        if delay.as_millis() > 0 {
            tokio::time::sleep(delay).await;
        }
    }

    if let Some(site) = aggregate_site {
        let articles = data.aggregate_articles();
        log::sub_item(&format!("{}: {} articles (derived)", site.key, articles.len()));
        data.success.push(CrawlSuccess {
            site_info: site,
            articles,
            timestamp: Utc::now(),
        });
    } else {
        log::warn("No aggregate placeholder in the registry; skipping derived feed");
    }

    Ok(data)
}
