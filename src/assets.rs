//! Stylesheet and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Output directory for assets, relative to the site root.
pub const ASSETS_DIR: &str = "assets";

pub const HOME_CSS: &str = "assets/home.css";
pub const LISTING_CSS: &str = "assets/listing.css";
pub const REVIEW_CSS: &str = "assets/review.css";
pub const ARTICLE_CSS: &str = "assets/article.css";
pub const UNLOCK_JS: &str = "assets/unlock.js";

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const CARDS: &str = include_str!("../assets/components/cards.css");

const LISTING_PAGE: &str = include_str!("../assets/page-listing.css");
const REVIEW_PAGE: &str = include_str!("../assets/page-review.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const UNLOCK_SCRIPT: &str = include_str!("../assets/unlock.js");

/// Writes all bundled assets to the output assets directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be
/// written.
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;

    write_bundled(assets_dir, "home.css", &[BASE, LAYOUT, CARDS, LISTING_PAGE])?;
    write_bundled(assets_dir, "listing.css", &[BASE, LAYOUT, CARDS, LISTING_PAGE])?;
    write_bundled(
        assets_dir,
        "review.css",
        &[BASE, LAYOUT, CARDS, REVIEW_PAGE, MARKDOWN],
    )?;
    write_bundled(assets_dir, "article.css", &[BASE, LAYOUT, MARKDOWN])?;
    write_bundled(assets_dir, "unlock.js", &[UNLOCK_SCRIPT])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let contents = parts.join("\n");
    fs::write(dir.join(name), contents)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
