use anyhow::{bail, Result};

use vidlink::{VideoLinkResolver, VideoOptions, VideoProvider};

/// Embed flags as given on the command line. Unset flags leave the
/// configured defaults alone.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmbedFlags {
    pub autoplay: bool,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub no_modestbranding: bool,
    pub no_rel: bool,
    pub no_controls: bool,
    pub muted: bool,
}

impl EmbedFlags {
    pub fn to_options(self) -> VideoOptions {
        VideoOptions {
            autoplay: self.autoplay.then_some(true),
            start: self.start,
            end: self.end,
            modestbranding: self.no_modestbranding.then_some(false),
            rel: self.no_rel.then_some(false),
            controls: self.no_controls.then_some(false),
            muted: self.muted.then_some(true),
        }
    }
}

pub fn cmd_embed(
    resolver: &VideoLinkResolver,
    provider: VideoProvider,
    id: &str,
    flags: &EmbedFlags,
) -> Result<()> {
    let url = resolver.embed_url_with(provider, id, flags.to_options());

    if url.is_empty() {
        bail!("No embed URL for {provider} id {id:?}");
    }

    println!("{url}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_map_to_none() {
        assert_eq!(EmbedFlags::default().to_options(), VideoOptions::default());
    }

    #[test]
    fn negative_flags_map_to_explicit_false() {
        let flags = EmbedFlags {
            no_modestbranding: true,
            no_rel: true,
            no_controls: true,
            ..Default::default()
        };
        let opts = flags.to_options();
        assert_eq!(opts.modestbranding, Some(false));
        assert_eq!(opts.rel, Some(false));
        assert_eq!(opts.controls, Some(false));
        assert_eq!(opts.autoplay, None);
    }
}
