//! `vidlink` CLI - Resolve video links from the command line

mod cmd;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vidlink::{ThumbnailQuality, VideoLinkResolver, VideoProvider};

#[derive(Parser)]
#[command(name = "vidlink")]
#[command(about = "Resolve video links to provider, id and embed/watch/thumbnail URLs")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/vidlink/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the provider a URL belongs to
    Detect {
        /// Video URL
        url: String,
    },

    /// Resolve a URL to provider, id and canonical URLs
    Resolve {
        /// Video URL
        url: String,

        /// Treat a known host without a usable id as an external link
        #[arg(long)]
        fallback: bool,

        /// Output format: full, compact, json
        #[arg(short, long, default_value = "full")]
        format: OutputFormat,
    },

    /// Build the embed URL for a provider id
    Embed {
        /// Provider (youtube, vimeo, wistia, mux)
        provider: VideoProvider,

        /// Provider-specific video id
        id: String,

        /// Start playing immediately
        #[arg(long)]
        autoplay: bool,

        /// Start offset in seconds
        #[arg(long)]
        start: Option<u32>,

        /// End offset in seconds
        #[arg(long)]
        end: Option<u32>,

        /// Show full provider branding
        #[arg(long)]
        no_modestbranding: bool,

        /// Hide related videos at the end
        #[arg(long)]
        no_rel: bool,

        /// Hide player controls
        #[arg(long)]
        no_controls: bool,

        /// Start muted
        #[arg(long)]
        muted: bool,
    },

    /// Build the thumbnail URL for a provider id
    Thumbnail {
        /// Provider (youtube, wistia, mux)
        provider: VideoProvider,

        /// Provider-specific video id
        id: String,

        /// Thumbnail size: default, medium, high, standard, maxres
        #[arg(short, long)]
        quality: Option<ThumbnailQuality>,
    },

    /// Check an id against a provider's id format
    Validate {
        /// Provider (youtube, vimeo, wistia, mux)
        provider: VideoProvider,

        /// Video id to check
        id: String,
    },
}

/// How `resolve` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Full,
    Compact,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = vidlink::Error;

    fn from_str(s: &str) -> vidlink::error::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(vidlink::Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Only the commands that apply configured defaults read the config file.
fn load_resolver(config: Option<&Path>) -> Result<VideoLinkResolver> {
    let config = vidlink::load_config(config)?;
    Ok(VideoLinkResolver::new(config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Detect { url } => {
            cmd::detect::cmd_detect(&url);
        }
        Commands::Resolve {
            url,
            fallback,
            format,
        } => {
            cmd::resolve::cmd_resolve(&load_resolver(config)?, &url, fallback, format)?;
        }
        Commands::Embed {
            provider,
            id,
            autoplay,
            start,
            end,
            no_modestbranding,
            no_rel,
            no_controls,
            muted,
        } => {
            let overrides = cmd::embed::EmbedFlags {
                autoplay,
                start,
                end,
                no_modestbranding,
                no_rel,
                no_controls,
                muted,
            };
            cmd::embed::cmd_embed(&load_resolver(config)?, provider, &id, &overrides)?;
        }
        Commands::Thumbnail {
            provider,
            id,
            quality,
        } => {
            cmd::thumbnail::cmd_thumbnail(&load_resolver(config)?, provider, &id, quality)?;
        }
        Commands::Validate { provider, id } => {
            if !cmd::validate::cmd_validate(provider, &id) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
