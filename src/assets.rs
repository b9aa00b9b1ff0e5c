//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// File name of the share list stylesheet.
pub const BLOG_SHARE_CSS: &str = "blog-share.css";

const BLOG_SHARE: &str = include_str!("../assets/blog-share.css");

/// Returns bundled share list stylesheet.
pub fn blog_share_css() -> &'static str {
    BLOG_SHARE
}

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, BLOG_SHARE_CSS, &[BLOG_SHARE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
