//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{AGGREGATE_KEY, AGGREGATE_MEMBER_KEYS, Site, SiteSelectors};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Static site generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Site registry, iterated once per run in the order given here
    #[serde(default = "defaults::default_sites")]
    pub sites: Vec<Site>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.generator.output_dir.trim().is_empty() {
            return Err(AppError::config("generator.output_dir is empty"));
        }
        if self.generator.web_address.trim().is_empty() {
            return Err(AppError::config("generator.web_address is empty"));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.sites.is_empty() {
            return Err(AppError::config("No sites defined"));
        }

        let mut seen = HashSet::new();
        for site in &self.sites {
            if site.key.trim().is_empty() {
                return Err(AppError::config(format!("Site '{}' has no key", site.name)));
            }
            if !seen.insert(site.key.as_str()) {
                return Err(AppError::config(format!("Duplicate site key '{}'", site.key)));
            }
        }

        if !seen.contains(AGGREGATE_KEY) {
            return Err(AppError::config(format!(
                "Aggregate site '{AGGREGATE_KEY}' is not in the registry"
            )));
        }
        for key in AGGREGATE_MEMBER_KEYS {
            if !seen.contains(key) {
                return Err(AppError::config(format!(
                    "Aggregate member '{key}' is not in the registry"
                )));
            }
        }

        Ok(())
    }

    /// Look up a configured site by key.
    pub fn site(&self, key: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.key == key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            crawler: CrawlerConfig::default(),
            logging: LoggingConfig::default(),
            sites: defaults::default_sites(),
        }
    }
}

/// Static site generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output directory, wiped and recreated on every run
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,

    /// Public address of the generated site, substituted into the index
    #[serde(default = "defaults::web_address")]
    pub web_address: String,

    /// Top-level path segment for feed files
    #[serde(default = "defaults::feed_root")]
    pub feed_root: String,

    /// Path to the index HTML template
    #[serde(default = "defaults::template_file")]
    pub template_file: String,

    /// Directory of static assets copied over the output
    #[serde(default = "defaults::assets_dir")]
    pub assets_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            web_address: defaults::web_address(),
            feed_root: defaults::feed_root(),
            template_file: defaults::template_file(),
            assets_dir: defaults::assets_dir(),
        }
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between site fetches in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: "debug", "info", "warn" or "error"
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    use super::*;

    pub fn output_dir() -> String {
        "public".to_string()
    }
    pub fn web_address() -> String {
        "rss.puang.network".to_string()
    }
    pub fn feed_root() -> String {
        "cau".to_string()
    }
    pub fn template_file() -> String {
        "html/index.html".to_string()
    }
    pub fn assets_dir() -> String {
        "static".to_string()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cau-rss/0.1; +https://rss.puang.network)".to_string()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn request_delay() -> u64 {
        200
    }
    pub fn log_level() -> String {
        "info".to_string()
    }

    fn dormitory_selectors() -> SiteSelectors {
        SiteSelectors {
            row_selector: "table.boardListUl tbody tr".to_string(),
            title_selector: "td.subject a".to_string(),
            date_selector: "td.date".to_string(),
            author_selector: None,
            link_selector: None,
            attr_name: "href".to_string(),
        }
    }

    pub fn default_sites() -> Vec<Site> {
        vec![
            Site {
                key: "cau".to_string(),
                name: "중앙대학교".to_string(),
                long_name: None,
                url: "https://www.cau.ac.kr/cms/FR_CON/index.do?MENU_ID=100".to_string(),
                board_url: None,
                selectors: SiteSelectors {
                    row_selector: "div.board-list table tbody tr".to_string(),
                    title_selector: "td.aleft a".to_string(),
                    date_selector: "td:nth-last-child(2)".to_string(),
                    author_selector: None,
                    link_selector: None,
                    attr_name: "href".to_string(),
                },
            },
            Site {
                key: "dormitory/seoul/bluemir".to_string(),
                name: "블루미르홀".to_string(),
                long_name: Some("서울캠퍼스 블루미르홀".to_string()),
                url: "https://dormitory.cau.ac.kr/bluemir/notice/notice.htm".to_string(),
                board_url: None,
                selectors: dormitory_selectors(),
            },
            Site {
                key: "dormitory/seoul/future_house".to_string(),
                name: "퓨처하우스".to_string(),
                long_name: Some("서울캠퍼스 퓨처하우스".to_string()),
                url: "https://dormitory.cau.ac.kr/future/notice/notice.htm".to_string(),
                board_url: None,
                selectors: dormitory_selectors(),
            },
            Site {
                key: "dormitory/seoul/global_house".to_string(),
                name: "글로벌하우스".to_string(),
                long_name: Some("서울캠퍼스 글로벌하우스".to_string()),
                url: "https://dormitory.cau.ac.kr/global/notice/notice.htm".to_string(),
                board_url: None,
                selectors: dormitory_selectors(),
            },
            // Aggregate placeholder: captured by the orchestrator, never crawled.
            Site {
                key: AGGREGATE_KEY.to_string(),
                name: "서울캠퍼스 기숙사".to_string(),
                long_name: Some("서울캠퍼스 기숙사 전체".to_string()),
                url: "https://dormitory.cau.ac.kr".to_string(),
                board_url: None,
                selectors: SiteSelectors::default(),
            },
            Site {
                key: "dormitory/davinci".to_string(),
                name: "다빈치캠퍼스 생활관".to_string(),
                long_name: None,
                url: "https://adormitory.cau.ac.kr/notice/notice.htm".to_string(),
                board_url: None,
                selectors: dormitory_selectors(),
            },
            Site {
                key: "library".to_string(),
                name: "중앙도서관".to_string(),
                long_name: None,
                url: "https://library.cau.ac.kr/guide/bulletins/notice".to_string(),
                board_url: None,
                selectors: SiteSelectors {
                    row_selector: "ul.ikc-bulletin-list li".to_string(),
                    title_selector: "a.ikc-bulletin-title".to_string(),
                    date_selector: "span.ikc-bulletin-date".to_string(),
                    author_selector: None,
                    link_selector: None,
                    attr_name: "href".to_string(),
                },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let mut config = Config::default();
        let duplicate = config.sites[0].clone();
        config.sites.push(duplicate);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_aggregate_members() {
        let mut config = Config::default();
        config.sites.retain(|s| s.key != AGGREGATE_MEMBER_KEYS[0]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_registry_contains_aggregate_placeholder() {
        let config = Config::default();
        assert_eq!(
            config.sites.iter().filter(|s| s.is_aggregate()).count(),
            1
        );
    }
}
