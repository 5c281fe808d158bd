//! Descriptor and option types shared by all providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::provider::VideoProvider;

/// A video link resolved to its host, id and canonical URLs.
///
/// Serialized with camelCase keys, the shape lesson records store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub provider: VideoProvider,
    /// Provider-specific id. Empty for [`VideoProvider::External`].
    pub video_id: String,
    /// URL for an iframe or stream player.
    pub embed_url: String,
    /// Human-shareable page for the video.
    pub watch_url: String,
    /// Still image URL, empty when the host has no unauthenticated one.
    pub thumbnail_url: String,
}

impl VideoInfo {
    /// Descriptor for a link that matched no known host: the URL stands in
    /// for both the embed and the watch URL.
    pub fn external(url: &str) -> Self {
        Self {
            provider: VideoProvider::External,
            video_id: String::new(),
            embed_url: url.to_string(),
            watch_url: url.to_string(),
            thumbnail_url: String::new(),
        }
    }
}

/// Playback options applied when building embed URLs.
///
/// Booleans are tri-state: `None` means "use the provider default", which
/// matters for `modestbranding` (on unless explicitly disabled). Options a
/// provider cannot express are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoOptions {
    pub autoplay: Option<bool>,
    /// Start offset in seconds. `0` is treated as unset.
    pub start: Option<u32>,
    /// End offset in seconds. `0` is treated as unset.
    pub end: Option<u32>,
    pub modestbranding: Option<bool>,
    pub rel: Option<bool>,
    pub controls: Option<bool>,
    pub muted: Option<bool>,
}

impl VideoOptions {
    pub(crate) fn autoplay(&self) -> bool {
        self.autoplay == Some(true)
    }

    pub(crate) fn muted(&self) -> bool {
        self.muted == Some(true)
    }

    pub(crate) fn start(&self) -> Option<u32> {
        self.start.filter(|&s| s > 0)
    }

    pub(crate) fn end(&self) -> Option<u32> {
        self.end.filter(|&e| e > 0)
    }

    /// Options from `other` override the ones set here.
    #[must_use]
    pub fn overlay(self, other: VideoOptions) -> VideoOptions {
        VideoOptions {
            autoplay: other.autoplay.or(self.autoplay),
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            modestbranding: other.modestbranding.or(self.modestbranding),
            rel: other.rel.or(self.rel),
            controls: other.controls.or(self.controls),
            muted: other.muted.or(self.muted),
        }
    }
}

/// YouTube thumbnail sizes. Other hosts have a single fixed thumbnail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    #[default]
    High,
    /// 640x480
    Standard,
    /// 1280x720, not generated for every upload
    Maxres,
}

impl ThumbnailQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Standard => "standard",
            Self::Maxres => "maxres",
        }
    }

    /// Image file name under `img.youtube.com/vi/{id}/`.
    pub fn youtube_filename(self) -> &'static str {
        match self {
            Self::Default => "default.jpg",
            Self::Medium => "mqdefault.jpg",
            Self::High => "hqdefault.jpg",
            Self::Standard => "sddefault.jpg",
            Self::Maxres => "maxresdefault.jpg",
        }
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbnailQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "standard" => Ok(Self::Standard),
            "maxres" => Ok(Self::Maxres),
            _ => Err(Error::UnknownQuality(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_descriptor_reuses_url() {
        let info = VideoInfo::external("https://example.com/video.mp4");
        assert_eq!(info.provider, VideoProvider::External);
        assert!(info.video_id.is_empty());
        assert_eq!(info.embed_url, "https://example.com/video.mp4");
        assert_eq!(info.watch_url, "https://example.com/video.mp4");
        assert!(info.thumbnail_url.is_empty());
    }

    #[test]
    fn video_info_serializes_camel_case() {
        let info = VideoInfo::external("https://example.com/a.mp4");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["provider"], "EXTERNAL");
        assert_eq!(json["videoId"], "");
        assert_eq!(json["embedUrl"], "https://example.com/a.mp4");
        assert_eq!(json["watchUrl"], "https://example.com/a.mp4");
        assert_eq!(json["thumbnailUrl"], "");
    }

    #[test]
    fn zero_offsets_count_as_unset() {
        let opts = VideoOptions {
            start: Some(0),
            end: Some(0),
            ..Default::default()
        };
        assert_eq!(opts.start(), None);
        assert_eq!(opts.end(), None);
    }

    #[test]
    fn overlay_prefers_explicit_values() {
        let base = VideoOptions {
            autoplay: Some(true),
            muted: Some(true),
            start: Some(10),
            ..Default::default()
        };
        let cli = VideoOptions {
            muted: Some(false),
            end: Some(90),
            ..Default::default()
        };
        let merged = base.overlay(cli);
        assert_eq!(merged.autoplay, Some(true));
        assert_eq!(merged.muted, Some(false));
        assert_eq!(merged.start, Some(10));
        assert_eq!(merged.end, Some(90));
        assert_eq!(merged.rel, None);
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let opts: VideoOptions = toml::from_str("autoplay = true\nstart = 30").unwrap();
        assert_eq!(opts.autoplay, Some(true));
        assert_eq!(opts.start, Some(30));
        assert_eq!(opts.controls, None);
    }

    #[test]
    fn parses_quality_names() {
        assert_eq!("maxres".parse(), Ok(ThumbnailQuality::Maxres));
        assert_eq!("HIGH".parse(), Ok(ThumbnailQuality::High));
        assert!("ultra".parse::<ThumbnailQuality>().is_err());
        assert_eq!(ThumbnailQuality::default(), ThumbnailQuality::High);
    }

    #[test]
    fn youtube_filenames() {
        assert_eq!(ThumbnailQuality::Default.youtube_filename(), "default.jpg");
        assert_eq!(ThumbnailQuality::Medium.youtube_filename(), "mqdefault.jpg");
        assert_eq!(ThumbnailQuality::High.youtube_filename(), "hqdefault.jpg");
        assert_eq!(ThumbnailQuality::Standard.youtube_filename(), "sddefault.jpg");
        assert_eq!(ThumbnailQuality::Maxres.youtube_filename(), "maxresdefault.jpg");
    }
}
