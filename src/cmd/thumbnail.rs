use anyhow::{bail, Result};

use vidlink::{get_video_thumbnail, ThumbnailQuality, VideoLinkResolver, VideoProvider};

pub fn cmd_thumbnail(
    resolver: &VideoLinkResolver,
    provider: VideoProvider,
    id: &str,
    quality: Option<ThumbnailQuality>,
) -> Result<()> {
    let url = match quality {
        Some(q) => get_video_thumbnail(provider, id, q),
        None => resolver.thumbnail(provider, id),
    };

    if url.is_empty() {
        bail!("No thumbnail URL for {provider} id {id:?}");
    }

    println!("{url}");
    Ok(())
}
