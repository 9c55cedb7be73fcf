// src/pipeline/render.rs

//! Output rendering.
//!
//! Writes the HTML index and the per-site feed files. Unlike crawling,
//! every error here is fatal: the index is the primary deliverable and a
//! half-written feed directory is worse than an aborted run.

use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, Result};
use crate::models::{Config, FeedData};
use crate::services::{FeedFormat, FeedMeta, generate_feed, render_feed_table};
use crate::utils::log;

/// Render the index page and all feed files into the output directory.
pub async fn run_renderer(config: &Config, data: &FeedData) -> Result<()> {
    render_index(config).await?;
    write_feed_files(config, data).await?;
    Ok(())
}

/// Render the index template and write `<output>/index.html`.
///
/// The template uses the `{table}` and `{web_address}` placeholders.
async fn render_index(config: &Config) -> Result<()> {
    let template = tokio::fs::read_to_string(&config.generator.template_file)
        .await
        .map_err(|e| {
            AppError::template(format!(
                "cannot read {}: {}",
                config.generator.template_file, e
            ))
        })?;

    let html = template
        .replace("{table}", &render_feed_table(config))
        .replace("{web_address}", &config.generator.web_address);

    let path = Path::new(&config.generator.output_dir).join("index.html");
    let file = tokio::fs::File::create(&path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes()).await?;
    writer.flush().await?;

    log::sub_item(&format!("index written to {}", path.display()));
    Ok(())
}

/// Write `rss`, `atom` and `json` files for every successful site.
async fn write_feed_files(config: &Config, data: &FeedData) -> Result<()> {
    let output_dir = Path::new(&config.generator.output_dir);

    for item in &data.success {
        let meta = FeedMeta::for_site(&item.site_info);
        let feed_dir = output_dir
            .join(&config.generator.feed_root)
            .join(&item.site_info.key);
        tokio::fs::create_dir_all(&feed_dir).await?;

        for format in FeedFormat::ALL {
            let text = generate_feed(&meta, &item.articles, format)?;
            tokio::fs::write(feed_dir.join(format.file_name()), text).await?;
        }
    }

    log::sub_item(&format!("feeds written for {} sites", data.success.len()));
    Ok(())
}
