pub mod api;
pub mod fixture;
pub mod scrape;

pub use api::ApiSource;
pub use fixture::FixtureSource;
pub use scrape::ScrapeSource;

use async_trait::async_trait;

use crate::app::Result;
use crate::config::BlockConfig;
use crate::domain::RawPost;

/// A single post source in the fallback chain.
#[async_trait]
pub trait Source {
    /// Short name used in failure logs.
    fn name(&self) -> &'static str;

    /// Attempt to fetch raw posts. An `Ok` empty vector means the source
    /// had nothing; an `Err` means it failed. The chain treats both as
    /// "try the next source".
    async fn try_fetch(&self, config: &BlockConfig) -> Result<Vec<RawPost>>;
}

/// Ordered fallback chain over post sources.
///
/// Sources are tried in decreasing order of trust and freshness: the
/// authenticated API, then the public profile scrape, then the built-in
/// fixture. Each source is attempted exactly once per render; there is no
/// retry.
pub struct FeedFetcher {
    sources: Vec<Box<dyn Source + Send + Sync>>,
}

impl FeedFetcher {
    pub fn with_sources(sources: Vec<Box<dyn Source + Send + Sync>>) -> Self {
        Self { sources }
    }

    /// Return the first non-empty batch the chain produces.
    ///
    /// Failures are logged and treated as empty batches; no error escapes
    /// this method. With the fixture as the last source the result is
    /// never empty, but a custom chain may exhaust without posts.
    pub async fn fetch(&self, config: &BlockConfig) -> Vec<RawPost> {
        for source in &self.sources {
            match source.try_fetch(config).await {
                Ok(posts) if !posts.is_empty() => {
                    tracing::debug!("{} returned {} posts", source.name(), posts.len());
                    return posts;
                }
                Ok(_) => {
                    tracing::debug!("{} returned no posts, falling through", source.name());
                }
                Err(e) => {
                    tracing::warn!("{} failed: {}", source.name(), e);
                }
            }
        }

        Vec::new()
    }
}
