//! Block settings and their resolution into a render configuration.
//!
//! Stored settings are read from `~/.config/postgrid/config.toml` at
//! startup. If the file doesn't exist, a default configuration with
//! comments is created. Missing fields fall back to defaults; only an
//! empty access token makes a configuration unusable.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::{PostgridError, Result};
use crate::domain::ImageVariant;

pub const DEFAULT_COUNT: u32 = 4;
pub const DEFAULT_WIDTH: u32 = 150;
pub const DEFAULT_HEIGHT: u32 = 150;
pub const DEFAULT_CACHE_TIME_MINUTES: u32 = 1440;

/// Persisted block settings, as the site operator saved them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlockSettings {
    pub access_token: String,
    pub count: u32,
    pub width: u32,
    pub height: u32,
    pub img_resolution: ImageVariant,
    pub cache_time_minutes: u32,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            img_resolution: ImageVariant::Thumbnail,
            cache_time_minutes: DEFAULT_CACHE_TIME_MINUTES,
        }
    }
}

/// Validated configuration for a single render. Immutable once resolved.
#[derive(Debug, Clone)]
pub struct BlockConfig {
    pub access_token: String,
    pub count: usize,
    pub width: u32,
    pub height: u32,
    pub img_resolution: ImageVariant,
    pub cache_time_minutes: u32,
}

impl BlockSettings {
    /// Resolve stored settings into a render configuration.
    ///
    /// Zero-valued numeric fields fall back to their defaults. Fails only
    /// when the access token is empty; callers must render an empty block
    /// instead of invoking the fetcher in that case.
    pub fn resolve(&self) -> Result<BlockConfig> {
        if self.access_token.trim().is_empty() {
            return Err(PostgridError::MissingCredential);
        }

        Ok(BlockConfig {
            access_token: self.access_token.clone(),
            count: if self.count == 0 {
                DEFAULT_COUNT as usize
            } else {
                self.count as usize
            },
            width: if self.width == 0 {
                DEFAULT_WIDTH
            } else {
                self.width
            },
            height: if self.height == 0 {
                DEFAULT_HEIGHT
            } else {
                self.height
            },
            img_resolution: self.img_resolution,
            cache_time_minutes: self.cache_time_minutes,
        })
    }

    /// Load settings from the given path, or the default path.
    ///
    /// If the settings file doesn't exist, creates a default one with
    /// comments. Missing fields in the file use default values.
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let settings: BlockSettings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(settings)
    }

    /// Get the default settings file path: `~/.config/postgrid/config.toml`
    pub fn default_config_path() -> std::result::Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("postgrid").join("config.toml"))
    }

    /// Create a default settings file with comments.
    pub fn create_default_config(path: &Path) -> std::result::Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default settings file content with comments.
    pub fn default_config_content() -> String {
        r##"# postgrid configuration

# Access token for the feed API. The block renders nothing until this is
# filled in. Eg. 460786509.ab103e5.a54b6834494643588d4217ee986384a8
access_token = ""

# Number of images to display
count = 4

# Image dimensions in pixels
width = 150
height = 150

# Image resolution tier, one of:
# "thumbnail" (150x150), "low_resolution" (320x320),
# "standard_resolution" (640x640)
img_resolution = "thumbnail"

# Cache time in minutes. Default is 1440 - 24 hours. This matters for
# performance and for staying under the feed API rate limits on busy
# sites.
cache_time_minutes = 1440
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
