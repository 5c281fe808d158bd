//! Mux link rules.
//!
//! Mux playback is an HLS manifest, so embed options cannot be expressed in
//! the URL and are ignored. Mux has no public watch page; resolved links keep
//! the URL they came from.

use std::sync::LazyLock;

use regex::Regex;

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mux\.com/v/([a-zA-Z0-9]+)").unwrap());

static VALID_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

pub fn extract_id(url: &str) -> Option<String> {
    ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

pub fn is_valid_id(id: &str) -> bool {
    VALID_ID_REGEX.is_match(id)
}

/// HLS manifest URL for a playback id.
pub fn embed_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://stream.mux.com/{id}.m3u8")
}

pub fn thumbnail_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    format!("https://image.mux.com/{id}/thumbnail.jpg")
}
