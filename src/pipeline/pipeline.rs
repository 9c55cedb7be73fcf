// src/pipeline/pipeline.rs

//! Full generation pipeline: wipe output, crawl, render, copy assets.

use std::io::ErrorKind;

use crate::error::Result;
use crate::models::{Config, FeedData};
use crate::services::ArticleSource;
use crate::utils::log;

use super::assets::run_assets;
use super::crawl::run_crawler;
use super::render::run_renderer;

/// Run the full static site generation pipeline.
///
/// The output directory is removed and recreated first, so a completed run
/// fully replaces any previous generation. There is no rollback: a fatal
/// error mid-run leaves the directory partially written.
pub async fn run_pipeline(config: &Config, source: &dyn ArticleSource) -> Result<FeedData> {
    log::header("CAU RSS static site generation");

    let output_dir = &config.generator.output_dir;
    match tokio::fs::remove_dir_all(output_dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tokio::fs::create_dir_all(output_dir).await?;

    log::step(1, 3, "Crawl - Fetching articles from configured sites");
    let data = run_crawler(config, source).await?;

    log::step(2, 3, "Render - Writing index and feed files");
    run_renderer(config, &data).await?;

    log::step(3, 3, "Assets - Copying static files");
    run_assets(config).await?;

    log::summary(
        "Static site generated",
        &[
            ("Output", output_dir.clone()),
            ("Sites succeeded", data.success.len().to_string()),
            ("Sites failed", data.failure.len().to_string()),
        ],
    );

    Ok(data)
}
