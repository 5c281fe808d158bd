//! Errors raised at the edges of the crate (string parsing for the CLI and
//! config file).
//!
//! Link resolution itself never fails: it reports "no video" as `None` or
//! an empty string.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown video provider: {0} (expected youtube, vimeo, wistia, mux, self_hosted or external)")]
    UnknownProvider(String),

    #[error("Unknown thumbnail quality: {0} (expected default, medium, high, standard or maxres)")]
    UnknownQuality(String),

    #[error("Unknown output format: {0} (expected full, compact or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
