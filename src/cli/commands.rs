use std::path::Path;

use crate::app::{AppContext, Result};
use crate::block;
use crate::config::BlockSettings;
use crate::domain::RenderResult;

pub async fn render(ctx: &AppContext, settings: &BlockSettings, json: bool) -> Result<()> {
    let result = block::render(ctx, settings).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        RenderResult::Empty => {
            println!("Nothing to render: access token is not configured");
        }
        RenderResult::Grid { posts, cache } => {
            for post in &posts {
                println!(
                    "{}x{}  {}  {}",
                    post.width, post.height, post.image_url, post.permalink
                );
            }
            println!(
                "{} posts, cacheable for {} seconds",
                posts.len(),
                cache.max_age_seconds
            );
        }
    }

    Ok(())
}

pub fn init(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => BlockSettings::default_config_path()?,
    };

    if path.exists() {
        println!("Settings file already exists: {}", path.display());
        return Ok(());
    }

    BlockSettings::create_default_config(&path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

pub fn config_path() -> Result<()> {
    println!("{}", BlockSettings::default_config_path()?.display());
    Ok(())
}
