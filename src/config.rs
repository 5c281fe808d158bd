//! Resolver defaults loaded from `~/.config/vidlink/config.toml`.
//!
//! ```toml
//! thumbnail_quality = "maxres"
//!
//! [embed]
//! autoplay = true
//! muted = true
//! start = 30
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{ThumbnailQuality, VideoOptions};

/// Defaults applied by [`crate::VideoLinkResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Embed options used when the caller passes none.
    pub embed: VideoOptions,
    /// Thumbnail size for hosts that offer several.
    pub thumbnail_quality: ThumbnailQuality,
}

/// Load the config from `path`, or from the default location when `None`.
///
/// A missing default file yields [`ResolverConfig::default`] (the file is
/// optional). An explicit `path` must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML, or if an
/// explicit `path` does not exist.
pub fn load_config(path: Option<&Path>) -> Result<ResolverConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = config_path();
            if !default.exists() {
                tracing::debug!("No config at {}, using defaults", default.display());
                return Ok(ResolverConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let config: ResolverConfig =
        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vidlink")
        .join("config.toml")
}
