//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cue::parse_timestamp;

/// Inspect WebVTT cue tracks and extract scrub previews.
#[derive(Debug, Parser)]
#[command(name = "cueplay", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the cues in a track
    Parse {
        /// Track file (WebVTT)
        file: PathBuf,
        /// Treat the track as chapters and strip numeric title prefixes
        #[arg(long)]
        chapters: bool,
        /// Print cues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the cue active at a time
    At {
        /// Track file (WebVTT)
        file: PathBuf,
        /// Playback time, as seconds or HH:MM:SS.mmm
        #[arg(value_parser = parse_time_arg, allow_hyphen_values = true)]
        time: f64,
        /// Resolve as a chapter track (end time exclusive)
        #[arg(long)]
        chapters: bool,
    },

    /// Format seconds as a time label
    Format {
        /// Time in seconds
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
        /// Total duration; prints "current / total" in a shared layout
        #[arg(long)]
        total: Option<f64>,
    },

    /// Show chapter marker positions for a progress bar
    Markers {
        /// Chapter track file (WebVTT)
        file: PathBuf,
        /// Media duration in seconds
        #[arg(long)]
        duration: f64,
    },

    /// Extract a scrub preview frame from a video
    Thumbnail {
        /// Video file or URL
        video: String,
        /// Time to capture, as seconds or HH:MM:SS.mmm
        #[arg(value_parser = parse_time_arg)]
        time: f64,
        /// Where to write the JPEG frame
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// Parse a time argument given as seconds or as a cue timestamp.
pub fn parse_time_arg(value: &str) -> Result<f64, String> {
    if let Ok(seconds) = value.parse::<f64>() {
        if seconds.is_finite() {
            return Ok(seconds);
        }
    }
    parse_timestamp(value)
        .ok_or_else(|| format!("'{}' is not seconds or HH:MM:SS.mmm", value))
}
