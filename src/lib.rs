//! cueplay - timed-cue core for video players
//!
//! Parses WebVTT-style subtitle and chapter tracks, resolves the cue active
//! at a playback time, keeps playback state in sync with a media element,
//! and caches scrub preview frames per media source.

pub mod cli;
pub mod config;
pub mod cue;
pub mod player;
pub mod thumbnail;
pub mod time;

pub use config::Config;
pub use cue::{Cue, FormatError};
pub use player::{MediaElement, MediaError, MediaEvent, MediaSource, Player};
pub use thumbnail::{ThumbnailCache, ThumbnailLookup};
