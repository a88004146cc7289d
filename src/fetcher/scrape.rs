//! Secondary source: scrape the public profile page.
//!
//! The page embeds a JSON blob between two known marker tokens. This is
//! coupled to an undocumented page format and is best-effort by nature:
//! any failure here is contained and the chain moves on.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::app::{PostgridError, Result};
use crate::config::BlockConfig;
use crate::domain::{Caption, ImageSource, RawPost, PERMALINK_BASE};
use crate::fetcher::Source;

pub const PROFILE_BASE: &str = "http://example-social.com";

/// Account whose public page is scraped when the API yields nothing.
pub const PROFILE_USERNAME: &str = "unisgmba";

const SHARED_DATA_MARKER: &str = "window._sharedData = ";
const SHARED_DATA_TERMINATOR: &str = ";</script>";

const TIMELINE_EDGES_PATH: &str =
    "/entry_data/ProfilePage/0/graphql/user/edge_owner_to_timeline_media/edges";

pub struct ScrapeSource {
    client: Client,
    base_url: String,
}

impl ScrapeSource {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, PROFILE_BASE)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source for ScrapeSource {
    fn name(&self) -> &'static str {
        "profile-scrape"
    }

    async fn try_fetch(&self, config: &BlockConfig) -> Result<Vec<RawPost>> {
        let url = format!("{}/{}", self.base_url, PROFILE_USERNAME);

        let response = self.client.get(&url).send().await?;
        response.error_for_status_ref()?;
        let body = response.text().await?;

        let shared = extract_shared_data(&body)?;
        Ok(collect_posts(&shared, config))
    }
}

/// Slice the embedded JSON blob out of the profile page HTML.
fn extract_shared_data(html: &str) -> Result<Value> {
    let start = html
        .find(SHARED_DATA_MARKER)
        .ok_or(PostgridError::MarkerNotFound)?
        + SHARED_DATA_MARKER.len();
    let rest = &html[start..];
    let end = rest
        .find(SHARED_DATA_TERMINATOR)
        .ok_or(PostgridError::MarkerNotFound)?;

    Ok(serde_json::from_str(&rest[..end])?)
}

/// Walk the timeline media edges and build raw posts from the first
/// `count` nodes. Nodes missing the expected fields are skipped rather
/// than failing the batch.
fn collect_posts(shared: &Value, config: &BlockConfig) -> Vec<RawPost> {
    let Some(edges) = shared.pointer(TIMELINE_EDGES_PATH).and_then(Value::as_array) else {
        return Vec::new();
    };

    edges
        .iter()
        .take(config.count)
        .filter_map(|edge| node_to_post(edge.pointer("/node")?, config))
        .collect()
}

fn node_to_post(node: &Value, config: &BlockConfig) -> Option<RawPost> {
    let id = node.get("id")?.as_str()?.to_string();
    let shortcode = node.get("shortcode")?.as_str()?.to_string();
    let display_url = node.get("display_url")?.as_str()?.to_string();

    let caption = node
        .pointer("/edge_media_to_caption/edges/0/node/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // The page only exposes one image URL, so it is filed under the
    // variant the configuration asks for.
    let mut images = HashMap::new();
    images.insert(
        config.img_resolution.key().to_string(),
        ImageSource { url: display_url },
    );

    Some(RawPost {
        id: Some(id),
        link: Some(format!("{PERMALINK_BASE}{shortcode}")),
        shortcode: Some(shortcode),
        images,
        caption: Some(Caption { text: caption }),
    })
}
