//! Vimeo link rules.
//!
//! Ids are numeric. Vimeo has no unauthenticated thumbnail URL, so there is
//! no thumbnail builder here.

use std::sync::LazyLock;

use regex::Regex;

use super::with_query;
use crate::types::VideoOptions;

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"vimeo\.com/(?:channels/(?:\w+/)?|groups/[^/]*/videos/|album/\d+/video/|video/|)(\d+)(?:$|[/?#&])",
    )
    .unwrap()
});

static VALID_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Extract the numeric id from `vimeo.com/{id}`, `vimeo.com/channels/{name}/{id}`,
/// `vimeo.com/groups/{name}/videos/{id}`, `vimeo.com/album/{n}/video/{id}` or
/// `player.vimeo.com/video/{id}`.
pub fn extract_id(url: &str) -> Option<String> {
    ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

pub fn is_valid_id(id: &str) -> bool {
    VALID_ID_REGEX.is_match(id)
}

/// Player URL with optional `autoplay=1`, `t={start}s` and `muted=1`.
pub fn embed_url(id: &str, options: &VideoOptions) -> String {
    if id.is_empty() {
        return String::new();
    }

    let mut params = Vec::new();
    if options.autoplay() {
        params.push("autoplay=1".to_string());
    }
    if let Some(start) = options.start() {
        params.push(format!("t={start}s"));
    }
    if options.muted() {
        params.push("muted=1".to_string());
    }

    with_query(format!("https://player.vimeo.com/video/{id}"), &params)
}

pub fn watch_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://vimeo.com/{id}")
}
