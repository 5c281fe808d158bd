use anyhow::{bail, Result};

use vidlink::{VideoInfo, VideoLinkResolver};

use crate::OutputFormat;

pub fn cmd_resolve(
    resolver: &VideoLinkResolver,
    url: &str,
    fallback: bool,
    format: OutputFormat,
) -> Result<()> {
    let url = url.trim();
    let resolved = if fallback {
        resolver.resolve_or_external(url)
    } else {
        resolver.resolve(url)
    };

    let Some(info) = resolved else {
        bail!("Could not resolve a video from {url:?}");
    };

    match format {
        OutputFormat::Full => print_full(&info),
        OutputFormat::Compact => println!("{}", compact_line(&info)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }

    Ok(())
}

fn print_full(info: &VideoInfo) {
    println!("🎬 Provider:  {}", info.provider);
    println!("🆔 Video ID:  {}", or_none(&info.video_id));
    println!("▶️  Embed:     {}", or_none(&info.embed_url));
    println!("🔗 Watch:     {}", or_none(&info.watch_url));
    println!("🖼️  Thumbnail: {}", or_none(&info.thumbnail_url));
}

/// `PROVIDER ID EMBED_URL`, with `-` for an empty id.
fn compact_line(info: &VideoInfo) -> String {
    let id = if info.video_id.is_empty() {
        "-"
    } else {
        &info.video_id
    };
    format!("{} {} {}", info.provider, id, info.embed_url)
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
