pub mod cache;
pub mod post;

pub use cache::CacheDirective;
pub use post::{Caption, DisplayPost, ImageSource, ImageVariant, RawPost, PERMALINK_BASE};

use serde::Serialize;

/// Outcome of one render call.
///
/// `Empty` is produced only when the access token is missing; with a
/// token present the fixture source guarantees a populated grid.
#[derive(Debug, Clone, Serialize)]
pub enum RenderResult {
    Grid {
        posts: Vec<DisplayPost>,
        cache: CacheDirective,
    },
    Empty,
}

impl RenderResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderResult::Empty)
    }
}
