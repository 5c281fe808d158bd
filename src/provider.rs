//! Video hosting providers and URL-to-provider detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The closed set of video hosts a link can resolve to.
///
/// `External` is the fallback for URLs that match no known host.
/// `SelfHosted` is a recognized tag without any extraction or URL rules;
/// nothing in this crate ever detects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoProvider {
    #[serde(rename = "YOUTUBE")]
    YouTube,
    Vimeo,
    Wistia,
    Mux,
    SelfHosted,
    External,
}

impl VideoProvider {
    /// All providers, in declaration order.
    pub const ALL: [VideoProvider; 6] = [
        Self::YouTube,
        Self::Vimeo,
        Self::Wistia,
        Self::Mux,
        Self::SelfHosted,
        Self::External,
    ];

    /// Stored form of the provider tag (e.g. `"YOUTUBE"`, `"SELF_HOSTED"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::YouTube => "YOUTUBE",
            Self::Vimeo => "VIMEO",
            Self::Wistia => "WISTIA",
            Self::Mux => "MUX",
            Self::SelfHosted => "SELF_HOSTED",
            Self::External => "EXTERNAL",
        }
    }

    /// Domain markers checked by [`detect_video_provider`]. Empty for the
    /// tags that are never detected from a URL.
    pub fn domain_markers(self) -> &'static [&'static str] {
        match self {
            Self::YouTube => &["youtube.com", "youtu.be"],
            Self::Vimeo => &["vimeo.com"],
            Self::Wistia => &["wistia.com", "wi.st"],
            Self::Mux => &["mux.com"],
            Self::SelfHosted | Self::External => &[],
        }
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| Error::UnknownProvider(s.to_string()))
    }
}

/// Providers in detection priority order. First match wins.
const DETECTION_ORDER: [VideoProvider; 4] = [
    VideoProvider::YouTube,
    VideoProvider::Vimeo,
    VideoProvider::Wistia,
    VideoProvider::Mux,
];

/// Identify the host of a video URL by substring match on its domain markers.
///
/// Matching runs on the raw string (no URL parsing, case-sensitive), so
/// malformed input simply falls through to [`VideoProvider::External`].
/// An empty string is `External`.
pub fn detect_video_provider(url: &str) -> VideoProvider {
    if url.is_empty() {
        return VideoProvider::External;
    }

    DETECTION_ORDER
        .into_iter()
        .find(|provider| {
            provider
                .domain_markers()
                .iter()
                .any(|marker| url.contains(marker))
        })
        .unwrap_or(VideoProvider::External)
}
