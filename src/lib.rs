//! `vidlink` - Video link normalization
//!
//! Turns a pasted video URL into a host, an id and the canonical URLs a
//! lesson page needs.
//!
//! # Features
//!
//! - **Detection**: `YouTube`, Vimeo, Wistia and Mux by domain marker, anything
//!   else as an external link
//! - **Extraction**: provider-specific id rules, validated per host
//! - **URL building**: embed (with playback options), watch and thumbnail URLs
//! - **Pure**: no network, no state; safe to call from any thread
//!
//! # Example
//!
//! ```rust
//! use vidlink::{extract_video_info, get_video_embed_url, VideoOptions, VideoProvider};
//!
//! let info = extract_video_info("https://youtu.be/dQw4w9WgXcQ").unwrap();
//! assert_eq!(info.provider, VideoProvider::YouTube);
//! assert_eq!(info.watch_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
//!
//! let opts = VideoOptions { autoplay: Some(true), start: Some(42), ..Default::default() };
//! let embed = get_video_embed_url(info.provider, &info.video_id, &opts);
//! assert_eq!(
//!     embed,
//!     "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&start=42&modestbranding=1"
//! );
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod resolver;
pub mod types;

pub use config::{load_config, ResolverConfig};
pub use error::Error;
pub use provider::{detect_video_provider, VideoProvider};
pub use resolver::{
    extract_video_info, get_video_embed_url, get_video_thumbnail, get_video_watch_url,
    is_valid_video_id, VideoLinkResolver,
};
pub use types::{ThumbnailQuality, VideoInfo, VideoOptions};

/// Version of vidlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
