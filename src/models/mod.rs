// src/models/mod.rs

//! Domain models for the feed generator.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod outcome;
mod site;

// Re-export all public types
pub use article::Article;
pub use config::{Config, CrawlerConfig, GeneratorConfig, LoggingConfig};
pub use outcome::{CrawlFailure, CrawlSuccess, FeedData};
pub use site::{AGGREGATE_KEY, AGGREGATE_MEMBER_KEYS, Site, SiteSelectors};
