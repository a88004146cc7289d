use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum PostgridError {
    #[error("access token is not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shared-data marker not found in profile page")]
    MarkerNotFound,

    #[error("no {0} image for this post")]
    MissingVariant(String),

    #[error("post has neither link nor shortcode")]
    MissingPermalink,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PostgridError>;
