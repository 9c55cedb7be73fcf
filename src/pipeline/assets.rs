// src/pipeline/assets.rs

//! Static asset copying.
//!
//! Overlays the static assets tree onto the output directory after the
//! generated files are written. Copy errors are propagated; a missing
//! assets directory only logs a warning.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Copy the static assets tree into the output directory.
pub async fn run_assets(config: &Config) -> Result<()> {
    let assets_dir = Path::new(&config.generator.assets_dir);
    if !assets_dir.is_dir() {
        log::warn(&format!(
            "Assets directory {} not found; skipping",
            assets_dir.display()
        ));
        return Ok(());
    }

    let copied = copy_tree(assets_dir, Path::new(&config.generator.output_dir)).await?;
    log::sub_item(&format!("{copied} asset files copied"));
    Ok(())
}

/// Recursively copy `src` into `dst`, returning the number of files copied.
///
/// Uses an explicit directory stack instead of recursion so the futures
/// stay boxless.
async fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    let mut stack: Vec<(PathBuf, PathBuf)> = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((src_dir, dst_dir)) = stack.pop() {
        tokio::fs::create_dir_all(&dst_dir).await?;

        let mut entries = tokio::fs::read_dir(&src_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let src_path = entry.path();
            let dst_path = dst_dir.join(entry.file_name());

            if entry.file_type().await?.is_dir() {
                stack.push((src_path, dst_path));
            } else {
                tokio::fs::copy(&src_path, &dst_path).await?;
                copied += 1;
            }
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_copy_tree_preserves_structure() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("static");
        let dst = tmp.path().join("public");

        std::fs::create_dir_all(src.join("css")).unwrap();
        std::fs::write(src.join("favicon.ico"), b"icon").unwrap();
        std::fs::write(src.join("css/style.css"), b"body {}").unwrap();

        let copied = copy_tree(&src, &dst).await.unwrap();

        assert_eq!(copied, 2);
        assert_eq!(std::fs::read(dst.join("favicon.ico")).unwrap(), b"icon");
        assert_eq!(std::fs::read(dst.join("css/style.css")).unwrap(), b"body {}");
    }

    #[tokio::test]
    async fn test_copy_does_not_disturb_existing_files() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("static");
        let dst = tmp.path().join("public");

        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(src.join("style.css"), b"body {}").unwrap();
        std::fs::write(dst.join("index.html"), b"<html></html>").unwrap();

        copy_tree(&src, &dst).await.unwrap();

        assert_eq!(
            std::fs::read(dst.join("index.html")).unwrap(),
            b"<html></html>"
        );
        assert!(dst.join("style.css").exists());
    }

    #[tokio::test]
    async fn test_missing_assets_dir_is_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.generator.assets_dir = tmp.path().join("nope").display().to_string();
        config.generator.output_dir = tmp.path().join("public").display().to_string();

        assert!(run_assets(&config).await.is_ok());
    }
}
