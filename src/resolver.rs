//! Link resolution: dispatch from a URL to the matching host rules.
//!
//! # Example
//!
//! ```rust
//! use vidlink::{extract_video_info, VideoProvider};
//!
//! let info = extract_video_info("https://vimeo.com/76979871").unwrap();
//! assert_eq!(info.provider, VideoProvider::Vimeo);
//! assert_eq!(info.video_id, "76979871");
//! assert_eq!(info.embed_url, "https://player.vimeo.com/video/76979871");
//! assert_eq!(info.watch_url, "https://vimeo.com/76979871");
//! assert!(info.thumbnail_url.is_empty());
//!
//! // Host recognized but no id: hard failure, not an External fallback.
//! assert!(extract_video_info("https://vimeo.com/notanumber").is_none());
//! ```

use crate::config::ResolverConfig;
use crate::provider::{detect_video_provider, VideoProvider};
use crate::providers::{mux, vimeo, wistia, youtube};
use crate::types::{ThumbnailQuality, VideoInfo, VideoOptions};

/// Resolve a URL with default embed options and thumbnail quality.
///
/// Returns `None` for an empty URL, or when the URL names a known host but
/// carries no id that host's rules can extract. A URL matching no host at
/// all resolves to [`VideoInfo::external`].
pub fn extract_video_info(url: &str) -> Option<VideoInfo> {
    VideoLinkResolver::default().resolve(url)
}

/// Embed URL for an id. Empty when the id is empty or the provider has no
/// embed rule (`SelfHosted`, `External`).
pub fn get_video_embed_url(provider: VideoProvider, video_id: &str, options: &VideoOptions) -> String {
    let url = match provider {
        VideoProvider::YouTube => youtube::embed_url(video_id, options),
        VideoProvider::Vimeo => vimeo::embed_url(video_id, options),
        VideoProvider::Wistia => wistia::embed_url(video_id, options),
        VideoProvider::Mux => mux::embed_url(video_id),
        VideoProvider::SelfHosted | VideoProvider::External => String::new(),
    };
    tracing::trace!("embed url for {} {:?}: {}", provider, video_id, url);
    url
}

/// Thumbnail URL for an id. `quality` only affects `YouTube`. Empty for Vimeo
/// (needs an authenticated API call) and for providers without a rule.
pub fn get_video_thumbnail(provider: VideoProvider, video_id: &str, quality: ThumbnailQuality) -> String {
    match provider {
        VideoProvider::YouTube => youtube::thumbnail_url(video_id, quality),
        VideoProvider::Wistia => wistia::thumbnail_url(video_id),
        VideoProvider::Mux => mux::thumbnail_url(video_id),
        VideoProvider::Vimeo | VideoProvider::SelfHosted | VideoProvider::External => {
            String::new()
        }
    }
}

/// Canonical watch page for an id. Empty for providers whose page cannot be
/// derived from the id alone (Mux, `SelfHosted`, `External`).
pub fn get_video_watch_url(provider: VideoProvider, video_id: &str) -> String {
    match provider {
        VideoProvider::YouTube => youtube::watch_url(video_id),
        VideoProvider::Vimeo => vimeo::watch_url(video_id),
        VideoProvider::Wistia => wistia::watch_url(video_id),
        VideoProvider::Mux | VideoProvider::SelfHosted | VideoProvider::External => String::new(),
    }
}

/// Check an id against the provider's id format. Providers without an id
/// format (`SelfHosted`, `External`) accept anything.
pub fn is_valid_video_id(provider: VideoProvider, video_id: &str) -> bool {
    match provider {
        VideoProvider::YouTube => youtube::is_valid_id(video_id),
        VideoProvider::Vimeo => vimeo::is_valid_id(video_id),
        VideoProvider::Wistia => wistia::is_valid_id(video_id),
        VideoProvider::Mux => mux::is_valid_id(video_id),
        VideoProvider::SelfHosted | VideoProvider::External => true,
    }
}

fn extract_id(provider: VideoProvider, url: &str) -> Option<String> {
    match provider {
        VideoProvider::YouTube => youtube::extract_id(url),
        VideoProvider::Vimeo => vimeo::extract_id(url),
        VideoProvider::Wistia => wistia::extract_id(url),
        VideoProvider::Mux => mux::extract_id(url),
        VideoProvider::SelfHosted | VideoProvider::External => None,
    }
}

/// Resolves links using configured embed options and thumbnail quality.
///
/// Stateless apart from its configuration; share one instance freely.
#[derive(Debug, Clone, Default)]
pub struct VideoLinkResolver {
    config: ResolverConfig,
}

impl VideoLinkResolver {
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve a URL to its host, id and canonical URLs.
    ///
    /// Returns `None` if:
    /// - The URL is empty
    /// - A known host matched but its rules found no id
    pub fn resolve(&self, url: &str) -> Option<VideoInfo> {
        if url.is_empty() {
            return None;
        }

        let provider = detect_video_provider(url);
        if provider == VideoProvider::External {
            tracing::debug!("No video provider matched, treating as external: {}", url);
            return Some(VideoInfo::external(url));
        }

        tracing::debug!("Matched video provider: {}", provider);
        let Some(video_id) = extract_id(provider, url) else {
            tracing::debug!("Provider {} matched but no video id in {}", provider, url);
            return None;
        };

        let watch_url = match provider {
            // No id-derived page exists; keep the link we were given.
            VideoProvider::Mux => url.to_string(),
            _ => get_video_watch_url(provider, &video_id),
        };

        Some(VideoInfo {
            provider,
            embed_url: self.embed_url(provider, &video_id),
            watch_url,
            thumbnail_url: self.thumbnail(provider, &video_id),
            video_id,
        })
    }

    /// Like [`resolve`](Self::resolve), but a known host without an id is
    /// treated as an external raw embed URL instead of failing.
    ///
    /// Still `None` for an empty URL.
    pub fn resolve_or_external(&self, url: &str) -> Option<VideoInfo> {
        if url.is_empty() {
            return None;
        }
        self.resolve(url).or_else(|| {
            tracing::debug!("Falling back to external embed for {}", url);
            Some(VideoInfo::external(url))
        })
    }

    /// Embed URL using the configured default options.
    pub fn embed_url(&self, provider: VideoProvider, video_id: &str) -> String {
        get_video_embed_url(provider, video_id, &self.config.embed)
    }

    /// Embed URL with `overrides` layered over the configured options.
    pub fn embed_url_with(&self, provider: VideoProvider, video_id: &str, overrides: VideoOptions) -> String {
        get_video_embed_url(provider, video_id, &self.config.embed.overlay(overrides))
    }

    /// Thumbnail URL at the configured quality.
    pub fn thumbnail(&self, provider: VideoProvider, video_id: &str) -> String {
        get_video_thumbnail(provider, video_id, self.config.thumbnail_quality)
    }
}
