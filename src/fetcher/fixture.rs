use async_trait::async_trait;

use crate::app::Result;
use crate::config::BlockConfig;
use crate::domain::{Caption, ImageSource, ImageVariant, RawPost, PERMALINK_BASE};
use crate::fetcher::Source;

/// Shortcode and caption of each embedded post.
const FIXTURE_POSTS: [(&str, &str); 9] = [
    ("BiyyyQOHQBt", "Congratulations to this year's finalists of the global case competition."),
    ("BiweaukHdTT", "Join us tomorrow after work for our info event. Free registration, link in bio."),
    ("BiW1N0nnbWK", "Some of our students on a recent study mission abroad."),
    ("BiMHoMcHNhE", "Another big thank you to everyone who contributed to the charity gala. Photo set 2/2."),
    ("BiMESp9nfCZ", "Thank you to everyone who came out on Friday for the fundraiser! Photo set 1/2."),
    ("BiFa_jOn_Z7", "Class of 2018 kicking off their charity fundraiser with a concert last night."),
    ("Bh8ej1FnS1W", "An interactive session on networking strategies, both in person and online."),
    ("Bh6ReH4nEp6", "Well done to all students, alumni and friends who represented us at the marathon team run!"),
    ("BhyU_8KHJMW", "The new light installation at the station entrance is a clock. Have you deciphered it yet?"),
];

/// Tertiary source: a fixed embedded dataset.
///
/// Guarantees the grid is never visually empty when both network sources
/// fail. Every post carries a URL for each image variant, so any
/// configured resolution renders.
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    pub fn posts() -> Vec<RawPost> {
        FIXTURE_POSTS
            .iter()
            .map(|&(shortcode, caption)| fixture_post(shortcode, caption))
            .collect()
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

fn fixture_post(shortcode: &str, caption: &str) -> RawPost {
    let images = ImageVariant::ALL
        .iter()
        .map(|variant| {
            (
                variant.key().to_string(),
                ImageSource {
                    url: format!(
                        "https://cdn.example-social.com/media/{}/{}.jpg",
                        shortcode,
                        variant.key()
                    ),
                },
            )
        })
        .collect();

    RawPost {
        id: Some(shortcode.to_string()),
        shortcode: Some(shortcode.to_string()),
        link: Some(format!("{PERMALINK_BASE}{shortcode}")),
        images,
        caption: Some(Caption {
            text: caption.to_string(),
        }),
    }
}

#[async_trait]
impl Source for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn try_fetch(&self, _config: &BlockConfig) -> Result<Vec<RawPost>> {
        Ok(Self::posts())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_fixture_has_nine_posts() {
        assert_eq!(FixtureSource::posts().len(), 9);
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let posts = FixtureSource::posts();
        let ids: HashSet<_> = posts.iter().filter_map(|p| p.id.as_deref()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_every_post_has_every_variant() {
        for post in FixtureSource::posts() {
            for variant in ImageVariant::ALL {
                assert!(
                    post.images.contains_key(variant.key()),
                    "{:?} missing {}",
                    post.shortcode,
                    variant.key()
                );
            }
        }
    }

    #[test]
    fn test_every_post_has_a_permalink() {
        for post in FixtureSource::posts() {
            assert!(post.permalink().is_some());
        }
    }
}
