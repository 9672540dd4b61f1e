//! Media-playback collaborator interface.
//!
//! The store never drives playback itself. It forwards commands through
//! [`MediaElement`] and learns what actually happened from [`MediaEvent`]s
//! reported back by the element.

use std::fmt;

/// Identity of a loaded media source (a path or URL).
///
/// Session-scoped state such as the thumbnail cache is tied to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Events reported by the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available; duration in seconds
    LoadedMetadata { duration: f64 },
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Playback position changed (irregular ticks, seeks)
    TimeUpdate { time: f64 },
    /// Volume changed
    VolumeChange { volume: f64 },
}

/// A media element that accepts playback commands.
///
/// Commands return once the element has accepted or rejected them; the
/// resulting state change arrives later as a [`MediaEvent`].
pub trait MediaElement {
    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self) -> Result<(), MediaError>;

    /// Seek to `time` seconds.
    fn seek(&mut self, time: f64) -> Result<(), MediaError>;

    /// Set volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError>;
}

/// Why a media element refused a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("Blocked by playback policy: {0}")]
    Blocked(String),

    #[error("No media loaded")]
    NotLoaded,

    #[error("Media element failed: {0}")]
    Failed(String),
}
