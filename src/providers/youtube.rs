//! `YouTube` link rules.
//!
//! Recognized shapes: `watch?v=ID`, `youtu.be/ID`, `/embed/ID`, `/v/ID`,
//! `/u/{x}/ID` and `&v=ID` inside a longer query.
//!
//! # Example
//!
//! ```rust
//! use vidlink::providers::youtube;
//! use vidlink::{ThumbnailQuality, VideoOptions};
//!
//! let id = youtube::extract_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
//! assert_eq!(id, "dQw4w9WgXcQ");
//!
//! let embed = youtube::embed_url(&id, &VideoOptions::default());
//! assert_eq!(embed, "https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1");
//!
//! let thumb = youtube::thumbnail_url(&id, ThumbnailQuality::Maxres);
//! assert_eq!(thumb, "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::with_query;
use crate::types::{ThumbnailQuality, VideoOptions};

/// Leftmost marker followed by a full id wins. Path markers only match as
/// whole segments, so `school.dev/` or `/nav/` in a query never count.
static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|[?&]v=)([a-zA-Z0-9_-]{11})(?:[#&?/]|$)")
        .unwrap()
});

static VALID_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap());

/// Extract the 11-character video id, or `None` if the URL has no
/// recognizable id.
pub fn extract_id(url: &str) -> Option<String> {
    ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

/// Exactly 11 characters of `[a-zA-Z0-9_-]`.
pub fn is_valid_id(id: &str) -> bool {
    VALID_ID_REGEX.is_match(id)
}

/// Build the iframe URL.
///
/// Parameters are emitted in a fixed order: `autoplay`, `start`, `end`,
/// `modestbranding` (on unless explicitly disabled), `rel=0`, `controls=0`.
/// `muted` has no `YouTube` equivalent and is ignored.
pub fn embed_url(id: &str, options: &VideoOptions) -> String {
    if id.is_empty() {
        return String::new();
    }

    let mut params = Vec::new();
    if options.autoplay() {
        params.push("autoplay=1".to_string());
    }
    if let Some(start) = options.start() {
        params.push(format!("start={start}"));
    }
    if let Some(end) = options.end() {
        params.push(format!("end={end}"));
    }
    if options.modestbranding != Some(false) {
        params.push("modestbranding=1".to_string());
    }
    if options.rel == Some(false) {
        params.push("rel=0".to_string());
    }
    if options.controls == Some(false) {
        params.push("controls=0".to_string());
    }

    with_query(format!("https://www.youtube.com/embed/{id}"), &params)
}

pub fn watch_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://www.youtube.com/watch?v={id}")
}

pub fn thumbnail_url(id: &str, quality: ThumbnailQuality) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!(
        "https://img.youtube.com/vi/{id}/{}",
        quality.youtube_filename()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_from_known_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=share",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ#comments",
        ] {
            assert_eq!(extract_id(url).as_deref(), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn first_marker_wins_over_later_query_text() {
        for url in [
            "https://www.youtube.com/embed/dQw4w9WgXcQ?origin=https://school.dev/",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&redirect=/nav/home",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLx&v=short",
            "https://youtu.be/dQw4w9WgXcQ?feature=shared&embed/other",
        ] {
            assert_eq!(extract_id(url).as_deref(), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn path_markers_need_a_segment_boundary() {
        assert_eq!(extract_id("https://www.youtube.com/nav/dQw4w9WgXcQ"), None);
        assert_eq!(extract_id("https://www.youtube.com/reembed/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn rejects_wrong_length_ids() {
        assert_eq!(extract_id("https://youtu.be/dQw4w9WgXc"), None);
        assert_eq!(extract_id("https://youtu.be/dQw4w9WgXcQQ"), None);
        assert_eq!(extract_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn rejects_urls_without_id_marker() {
        assert_eq!(extract_id("https://www.youtube.com/"), None);
        assert_eq!(extract_id("https://www.youtube.com/channel/UCxyz"), None);
    }

    #[test]
    fn rejects_eleven_chars_with_invalid_characters() {
        assert_eq!(extract_id("https://youtu.be/abc/defghij"), None);
        assert_eq!(extract_id("https://youtu.be/abc.defghij"), None);
    }

    #[test]
    fn id_validation_boundaries() {
        assert!(is_valid_id(ID));
        assert!(is_valid_id("a-b_c-d_e-f"));
        assert!(!is_valid_id("dQw4w9WgXc"));
        assert!(!is_valid_id("dQw4w9WgXcQQ"));
        assert!(!is_valid_id("dQw4w9WgX!Q"));
        assert!(!is_valid_id(""));
    }

    #[test]
    fn embed_defaults_to_modest_branding() {
        assert_eq!(
            embed_url(ID, &VideoOptions::default()),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1"
        );
    }

    #[test]
    fn embed_with_autoplay_and_no_related() {
        let opts = VideoOptions {
            autoplay: Some(true),
            rel: Some(false),
            ..Default::default()
        };
        let url = embed_url(ID, &opts);
        assert!(url.contains("autoplay=1"));
        assert!(url.contains("rel=0"));
        assert!(url.contains("modestbranding=1"));
        assert!(!url.contains("controls"));
    }

    #[test]
    fn embed_with_every_option() {
        let opts = VideoOptions {
            autoplay: Some(true),
            start: Some(30),
            end: Some(90),
            modestbranding: Some(false),
            rel: Some(false),
            controls: Some(false),
            muted: Some(true),
        };
        assert_eq!(
            embed_url(ID, &opts),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&start=30&end=90&rel=0&controls=0"
        );
    }

    #[test]
    fn embed_without_any_param_has_no_query() {
        let opts = VideoOptions {
            modestbranding: Some(false),
            rel: Some(true),
            controls: Some(true),
            autoplay: Some(false),
            ..Default::default()
        };
        assert_eq!(
            embed_url(ID, &opts),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn builders_guard_empty_id() {
        assert_eq!(embed_url("", &VideoOptions::default()), "");
        assert_eq!(watch_url(""), "");
        assert_eq!(thumbnail_url("", ThumbnailQuality::High), "");
    }

    #[test]
    fn thumbnail_for_each_quality() {
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::Maxres),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::Default),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/default.jpg"
        );
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::Medium),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
        );
    }

    #[test]
    fn watch_url_round_trips() {
        assert_eq!(extract_id(&watch_url(ID)).as_deref(), Some(ID));
    }
}
