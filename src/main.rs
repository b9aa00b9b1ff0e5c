use anyhow::{Context, Result};
use blogshare::components::layout::page_wrapper;
use blogshare::{BLOG_SHARE_CSS, Config, blog_share};
use maud::{Markup, html};
use std::fs;
use std::path::Path;

/// Wraps share links in a standalone preview page.
fn preview_page(config: &Config, share: Markup) -> Markup {
    page_wrapper(
        &config.title,
        &[BLOG_SHARE_CSS],
        html! {
            article class="post-preview" {
                h1 { (config.title) }
                p class="post-description" { (config.description) }
                (share)
            }
        },
    )
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let share = blog_share(&config.share_info(), &config.share_options());

    let Some(output) = &config.output else {
        println!("{}", share.into_string());
        return Ok(());
    };

    let html = if config.page {
        // Stylesheet is linked relative to the page
        let assets_dir = output
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(assets_dir).with_context(|| {
            format!("Failed to create output directory {}", assets_dir.display())
        })?;
        blogshare::write_css_assets(assets_dir).context("Failed to write CSS assets")?;
        preview_page(&config, share)
    } else {
        share
    };

    fs::write(output, html.into_string())
        .with_context(|| format!("Failed to write output to {}", output.display()))?;

    println!("Generated: {}", output.display());

    if config.open
        && let Err(e) = open::that(output)
    {
        eprintln!("Warning: Failed to open {}: {:#}", output.display(), e);
    }

    Ok(())
}
