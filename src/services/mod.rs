//! Service layer for the feed generator.
//!
//! This module contains the business logic for:
//! - Article crawling (`ArticleCrawler`, `ArticleSource`)
//! - Feed serialization (`generate_feed`)
//! - Index summary table rendering (`render_feed_table`)

mod crawler;
mod feed;
mod table;

pub use crawler::{ArticleCrawler, ArticleSource};
pub use feed::{FeedFormat, FeedMeta, generate_feed};
pub use table::render_feed_table;
