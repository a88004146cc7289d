use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::app::Result;
use crate::config::BlockConfig;
use crate::domain::RawPost;
use crate::fetcher::Source;

pub const API_BASE: &str = "https://api.example-social.com";

const RECENT_MEDIA_PATH: &str = "/v1/users/self/media/recent/";

/// Response envelope of the recent-media endpoint.
#[derive(Debug, Deserialize)]
struct MediaEnvelope {
    #[serde(default)]
    data: Vec<RawPost>,
}

/// Primary source: the authenticated feed API.
pub struct ApiSource {
    client: Client,
    base_url: String,
}

impl ApiSource {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, API_BASE)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, config: &BlockConfig) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join(RECENT_MEDIA_PATH)?;
        url.query_pairs_mut()
            .append_pair("client_id", "")
            .append_pair("access_token", &config.access_token)
            .append_pair("count", &config.count.to_string());
        Ok(url)
    }
}

#[async_trait]
impl Source for ApiSource {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn try_fetch(&self, config: &BlockConfig) -> Result<Vec<RawPost>> {
        let url = self.endpoint(config)?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        response.error_for_status_ref()?;

        let envelope: MediaEnvelope = response.json().await?;
        Ok(envelope.data)
    }
}
