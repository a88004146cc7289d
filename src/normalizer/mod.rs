use std::collections::BTreeSet;

use html_escape::decode_html_entities;

use crate::app::{PostgridError, Result};
use crate::config::BlockConfig;
use crate::domain::{CacheDirective, DisplayPost, RawPost};

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Map raw posts into display posts, preserving source order.
    ///
    /// A post that cannot be displayed (no permalink, or the configured
    /// image variant is absent) is skipped with a warning; the rest of
    /// the batch is kept.
    pub fn normalize(&self, posts: &[RawPost], config: &BlockConfig) -> Vec<DisplayPost> {
        posts
            .iter()
            .filter_map(|post| match self.normalize_post(post, config) {
                Ok(display) => Some(display),
                Err(e) => {
                    tracing::warn!("skipping post: {}", e);
                    None
                }
            })
            .collect()
    }

    fn normalize_post(&self, post: &RawPost, config: &BlockConfig) -> Result<DisplayPost> {
        let permalink = post.permalink().ok_or(PostgridError::MissingPermalink)?;

        let image = post
            .images
            .get(config.img_resolution.key())
            .ok_or_else(|| {
                PostgridError::MissingVariant(config.img_resolution.key().to_string())
            })?;

        let id = post
            .id
            .clone()
            .unwrap_or_else(|| DisplayPost::generate_id(&permalink));

        let caption = post
            .caption
            .as_ref()
            .map(|c| decode_html_entities(&c.text).to_string())
            .unwrap_or_default();

        Ok(DisplayPost {
            id,
            permalink,
            image_url: image.url.clone(),
            caption,
            width: config.width,
            height: config.height,
        })
    }

    /// Cache parameters for the rendered grid.
    ///
    /// Derived from configuration alone, independent of what any source
    /// returned.
    pub fn cache_directive(&self, config: &BlockConfig) -> CacheDirective {
        CacheDirective {
            key_parts: vec![
                "block".to_string(),
                "postgrid".to_string(),
                config.access_token.clone(),
            ],
            vary_contexts: BTreeSet::from(["languages:language_content".to_string()]),
            max_age_seconds: u64::from(config.cache_time_minutes) * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::BlockSettings;
    use crate::domain::{Caption, ImageSource, ImageVariant};

    fn config() -> BlockConfig {
        BlockSettings {
            access_token: "tok123".into(),
            count: 3,
            cache_time_minutes: 360,
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    fn post(id: &str, variants: &[ImageVariant]) -> RawPost {
        let images: HashMap<String, ImageSource> = variants
            .iter()
            .map(|v| {
                (
                    v.key().to_string(),
                    ImageSource {
                        url: format!("https://cdn.example-social.com/{}/{}.jpg", id, v.key()),
                    },
                )
            })
            .collect();

        RawPost {
            id: Some(id.to_string()),
            shortcode: Some(id.to_string()),
            link: Some(format!("https://www.example-social.com/p/{id}")),
            images,
            caption: Some(Caption {
                text: format!("caption {id}"),
            }),
        }
    }

    #[test]
    fn test_normalizes_well_formed_posts_in_order() {
        let raw = vec![
            post("a", &[ImageVariant::Thumbnail]),
            post("b", &[ImageVariant::Thumbnail]),
            post("c", &[ImageVariant::Thumbnail]),
        ];
        let normalizer = Normalizer::new();
        let posts = normalizer.normalize(&raw, &config());

        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, "a");
        assert_eq!(posts[1].id, "b");
        assert_eq!(posts[2].id, "c");
        assert_eq!(
            posts[0].image_url,
            "https://cdn.example-social.com/a/thumbnail.jpg"
        );
        assert_eq!(posts[0].width, 150);
        assert_eq!(posts[0].height, 150);
    }

    #[test]
    fn test_missing_variant_skips_post_but_keeps_batch() {
        let raw = vec![
            post("a", &[ImageVariant::Thumbnail]),
            post("b", &[ImageVariant::Low]),
            post("c", &[ImageVariant::Thumbnail]),
        ];
        let posts = Normalizer::new().normalize(&raw, &config());

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "a");
        assert_eq!(posts[1].id, "c");
    }

    #[test]
    fn test_post_without_link_or_shortcode_is_skipped() {
        let mut broken = post("a", &[ImageVariant::Thumbnail]);
        broken.link = None;
        broken.shortcode = None;
        let raw = vec![broken, post("b", &[ImageVariant::Thumbnail])];

        let posts = Normalizer::new().normalize(&raw, &config());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "b");
    }

    #[test]
    fn test_id_falls_back_to_permalink_hash() {
        let mut anon = post("a", &[ImageVariant::Thumbnail]);
        anon.id = None;
        let posts = Normalizer::new().normalize(&[anon], &config());

        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].id,
            DisplayPost::generate_id("https://www.example-social.com/p/a")
        );
    }

    #[test]
    fn test_caption_defaults_to_empty_and_decodes_entities() {
        let mut captionless = post("a", &[ImageVariant::Thumbnail]);
        captionless.caption = None;
        let mut encoded = post("b", &[ImageVariant::Thumbnail]);
        encoded.caption = Some(Caption {
            text: "fish &amp; chips".into(),
        });

        let posts = Normalizer::new().normalize(&[captionless, encoded], &config());
        assert_eq!(posts[0].caption, "");
        assert_eq!(posts[1].caption, "fish & chips");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = vec![
            post("a", &[ImageVariant::Thumbnail]),
            post("b", &[ImageVariant::Thumbnail]),
        ];
        let normalizer = Normalizer::new();
        let first = normalizer.normalize(&raw, &config());
        let second = normalizer.normalize(&raw, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_directive_from_config() {
        let directive = Normalizer::new().cache_directive(&config());

        assert_eq!(
            directive.key_parts,
            vec!["block".to_string(), "postgrid".to_string(), "tok123".to_string()]
        );
        assert!(directive
            .vary_contexts
            .contains("languages:language_content"));
        assert_eq!(directive.max_age_seconds, 21600);
    }

    #[test]
    fn test_cache_directive_zero_lifetime() {
        let cfg = BlockSettings {
            access_token: "tok123".into(),
            cache_time_minutes: 0,
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(Normalizer::new().cache_directive(&cfg).max_age_seconds, 0);
    }
}
