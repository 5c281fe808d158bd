//! Per-host link rules.
//!
//! Each module knows how to pull a video id out of a URL for one host and how
//! to build that host's embed, watch and thumbnail URLs from an id. Every
//! builder returns an empty string for an empty id.
//!
//! Dispatch over hosts lives in [`crate::resolver`]; these modules are plain
//! functions with no shared state beyond their compiled patterns.

pub mod mux;
pub mod vimeo;
pub mod wistia;
pub mod youtube;

/// Append `params` to `base` as a query string. No `?` when `params` is empty.
pub(crate) fn with_query(base: String, params: &[String]) -> String {
    if params.is_empty() {
        base
    } else {
        format!("{base}?{}", params.join("&"))
    }
}
