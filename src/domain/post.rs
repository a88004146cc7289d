use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Base URL for rebuilding a post permalink from its shortcode.
pub const PERMALINK_BASE: &str = "https://www.example-social.com/p/";

/// Image resolution tier selected per block configuration.
///
/// The wire keys match the per-post image map returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageVariant {
    Thumbnail,
    #[serde(rename = "low_resolution")]
    Low,
    #[serde(rename = "standard_resolution")]
    Standard,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 3] = [
        ImageVariant::Thumbnail,
        ImageVariant::Low,
        ImageVariant::Standard,
    ];

    /// Key of this variant in a post's image map.
    pub fn key(&self) -> &'static str {
        match self {
            ImageVariant::Thumbnail => "thumbnail",
            ImageVariant::Low => "low_resolution",
            ImageVariant::Standard => "standard_resolution",
        }
    }
}

impl Default for ImageVariant {
    fn default() -> Self {
        ImageVariant::Thumbnail
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Caption {
    #[serde(default)]
    pub text: String,
}

/// A post as returned by any of the three sources, before normalization.
///
/// All sources produce this one shape: the API deserializes into it
/// directly, the profile scraper and the built-in fixture construct it by
/// hand. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub shortcode: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, ImageSource>,
    #[serde(default)]
    pub caption: Option<Caption>,
}

impl RawPost {
    /// Permalink from the source link, or rebuilt from the shortcode.
    pub fn permalink(&self) -> Option<String> {
        self.link.clone().or_else(|| {
            self.shortcode
                .as_ref()
                .map(|s| format!("{PERMALINK_BASE}{s}"))
        })
    }
}

/// A normalized post ready for display in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPost {
    pub id: String,
    pub permalink: String,
    pub image_url: String,
    pub caption: String,
    pub width: u32,
    pub height: u32,
}

impl DisplayPost {
    /// Generate a deterministic ID for a post that carries none of its own
    pub fn generate_id(permalink: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(permalink.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permalink_prefers_source_link() {
        let post = RawPost {
            link: Some("https://www.example-social.com/p/abc".into()),
            shortcode: Some("xyz".into()),
            ..Default::default()
        };
        assert_eq!(
            post.permalink().as_deref(),
            Some("https://www.example-social.com/p/abc")
        );
    }

    #[test]
    fn test_permalink_rebuilt_from_shortcode() {
        let post = RawPost {
            shortcode: Some("xyz".into()),
            ..Default::default()
        };
        assert_eq!(
            post.permalink().as_deref(),
            Some("https://www.example-social.com/p/xyz")
        );
    }

    #[test]
    fn test_permalink_none_without_link_or_shortcode() {
        assert_eq!(RawPost::default().permalink(), None);
    }

    #[test]
    fn test_id_generation_deterministic() {
        let id1 = DisplayPost::generate_id("https://www.example-social.com/p/abc");
        let id2 = DisplayPost::generate_id("https://www.example-social.com/p/abc");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_is_hex_sha256() {
        let id = DisplayPost::generate_id("https://www.example-social.com/p/abc");
        assert_eq!(id.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_variant_wire_keys() {
        assert_eq!(ImageVariant::Thumbnail.key(), "thumbnail");
        assert_eq!(ImageVariant::Low.key(), "low_resolution");
        assert_eq!(ImageVariant::Standard.key(), "standard_resolution");
    }

    #[test]
    fn test_variant_deserializes_from_wire_key() {
        let v: ImageVariant = serde_json::from_str("\"low_resolution\"").unwrap();
        assert_eq!(v, ImageVariant::Low);
    }

    #[test]
    fn test_raw_post_deserializes_api_shape() {
        let json = r#"{
            "id": "1234",
            "link": "https://www.example-social.com/p/abcd",
            "images": {
                "thumbnail": {"url": "https://cdn.example-social.com/t/abcd.jpg"},
                "low_resolution": {"url": "https://cdn.example-social.com/l/abcd.jpg"}
            },
            "caption": {"text": "hello"}
        }"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_deref(), Some("1234"));
        assert_eq!(post.images.len(), 2);
        assert_eq!(post.caption.unwrap().text, "hello");
    }

    #[test]
    fn test_raw_post_tolerates_missing_fields() {
        let post: RawPost = serde_json::from_str("{}").unwrap();
        assert!(post.id.is_none());
        assert!(post.images.is_empty());
        assert!(post.caption.is_none());
    }
}
