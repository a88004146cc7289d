use std::time::Duration;

use reqwest::Client;

use crate::fetcher::{ApiSource, FeedFetcher, FixtureSource, ScrapeSource, Source};
use crate::normalizer::Normalizer;

pub struct AppContext {
    pub fetcher: FeedFetcher,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent("postgrid/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        let sources: Vec<Box<dyn Source + Send + Sync>> = vec![
            Box::new(ApiSource::new(client.clone())),
            Box::new(ScrapeSource::new(client)),
            Box::new(FixtureSource::new()),
        ];

        Self {
            fetcher: FeedFetcher::with_sources(sources),
            normalizer: Normalizer::new(),
        }
    }

    /// Context with a custom source chain, used by tests.
    pub fn with_sources(sources: Vec<Box<dyn Source + Send + Sync>>) -> Self {
        Self {
            fetcher: FeedFetcher::with_sources(sources),
            normalizer: Normalizer::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
