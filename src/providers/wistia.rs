//! Wistia link rules.

use std::sync::LazyLock;

use regex::Regex;

use super::with_query;
use crate::types::VideoOptions;

/// Known link shapes, tried in order. First match wins.
static ID_REGEXES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"wistia\.com/medias/([a-zA-Z0-9]+)").unwrap(),
        Regex::new(r"wi\.st/medias/([a-zA-Z0-9]+)").unwrap(),
        Regex::new(r"fast\.wistia\.net/embed/iframe/([a-zA-Z0-9]+)").unwrap(),
    ]
});

static VALID_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

pub fn extract_id(url: &str) -> Option<String> {
    ID_REGEXES
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

pub fn is_valid_id(id: &str) -> bool {
    VALID_ID_REGEX.is_match(id)
}

/// Iframe URL with optional `autoPlay=true` and `muted=true`.
pub fn embed_url(id: &str, options: &VideoOptions) -> String {
    if id.is_empty() {
        return String::new();
    }

    let mut params = Vec::new();
    if options.autoplay() {
        params.push("autoPlay=true".to_string());
    }
    if options.muted() {
        params.push("muted=true".to_string());
    }

    with_query(format!("https://fast.wistia.net/embed/iframe/{id}"), &params)
}

/// Account-independent media page; Wistia redirects it to the owner's domain.
pub fn watch_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://home.wistia.com/medias/{id}")
}

pub fn thumbnail_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://fast.wistia.com/embed/medias/{id}/swatch")
}
