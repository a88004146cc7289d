//! Render orchestration: settings in, grid out.

use crate::app::AppContext;
use crate::config::BlockSettings;
use crate::domain::RenderResult;

/// Render the block for the given stored settings.
///
/// An empty access token short-circuits to an empty render without
/// touching any source. Every other failure degrades through the source
/// chain, so a configured block always yields a populated grid.
pub async fn render(ctx: &AppContext, settings: &BlockSettings) -> RenderResult {
    let config = match settings.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("block configuration incomplete: {}", e);
            return RenderResult::Empty;
        }
    };

    let raw = ctx.fetcher.fetch(&config).await;
    let posts = ctx.normalizer.normalize(&raw, &config);
    let cache = ctx.normalizer.cache_directive(&config);

    RenderResult::Grid { posts, cache }
}
