//! cau-rss CLI
//!
//! Generates a static feed site for Chung-Ang University announcement
//! boards, ready for static hosting.

use clap::{Parser, Subcommand};

use cau_rss::{
    error::{AppError, Result},
    models::Config,
    pipeline,
    services::{ArticleCrawler, ArticleSource},
    utils::log,
};

/// cau-rss - CAU notice feed generator
#[derive(Parser, Debug)]
#[command(
    name = "cau-rss",
    version,
    about = "Static RSS/Atom/JSON feed generator for CAU notice boards"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the static site: crawl all sites, write index and feeds
    Generate {
        /// Output directory (default: from configuration)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Crawl a single site and print its articles
    Crawl {
        /// Site key (e.g. "dormitory/seoul/bluemir")
        key: String,
    },

    /// List the configured sites
    Sites,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
    log::init(level);
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    init_logging(&config, cli.verbose);

    match cli.command {
        Command::Generate { output } => {
            if let Some(dir) = output {
                config.generator.output_dir = dir;
            }
            config.validate()?;

            let crawler = ArticleCrawler::new(&config.crawler)?;
            pipeline::run_pipeline(&config, &crawler).await?;
        }

        Command::Crawl { key } => {
            let site = config
                .site(&key)
                .ok_or_else(|| AppError::config(format!("Unknown site key '{key}'")))?;
            if site.is_aggregate() {
                return Err(AppError::config(format!(
                    "'{key}' is the aggregate placeholder and cannot be crawled directly"
                )));
            }

            let crawler = ArticleCrawler::new(&config.crawler)?;
            let articles = crawler.fetch_articles(site).await?;

            log::info(&format!("{}: {} articles", site.key, articles.len()));
            for article in &articles {
                log::sub_item(&format!(
                    "{} | {} | {}",
                    article.date.format("%Y-%m-%d"),
                    article.title,
                    article.link
                ));
            }
        }

        Command::Sites => {
            log::info(&format!("{} configured sites:", config.sites.len()));
            for site in &config.sites {
                let marker = if site.is_aggregate() { " (derived)" } else { "" };
                log::sub_item(&format!(
                    "{} - {}{}",
                    site.key,
                    site.display_name(),
                    marker
                ));
            }
        }

        Command::Validate => {
            if let Err(e) = config.validate() {
                log::error(&format!("Config validation failed: {e}"));
                return Err(e);
            }
            log::success("Config OK");
        }
    }

    Ok(())
}
