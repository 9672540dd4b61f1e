//! Playback state store.
//!
//! Pairs a [`PlaybackState`] with the media element it reflects. Commands go
//! out to the element and never touch the state; state only changes when the
//! element reports an event back. A command the element refuses therefore
//! leaves the state as it was, and the refusal is returned to the caller.

use crate::cue::Cue;
use crate::player::media::{MediaElement, MediaError, MediaEvent};
use crate::player::state::{PlaybackState, StateChange};

/// Errors from playback commands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("{command} rejected by media element: {source}")]
    Rejected {
        command: &'static str,
        #[source]
        source: MediaError,
    },

    #[error("Invalid seek time: {0}")]
    InvalidTime(f64),

    #[error("Invalid volume: {0}")]
    InvalidVolume(f64),
}

/// State store driven by media element events.
pub struct PlaybackStore<M> {
    state: PlaybackState,
    media: M,
}

impl<M: MediaElement> PlaybackStore<M> {
    pub fn new(media: M) -> Self {
        Self {
            state: PlaybackState::new(),
            media,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The media element commands are forwarded to.
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Apply an event reported by the media element, in arrival order.
    pub fn handle_event(&mut self, event: MediaEvent) -> Vec<StateChange> {
        tracing::trace!(?event, "media event");
        self.state.apply(event)
    }

    /// Replace the subtitle cues.
    pub fn set_subtitles(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.state.set_subtitles(cues)
    }

    /// Replace the chapter cues.
    pub fn set_chapters(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.state.set_chapters(cues)
    }

    /// Return to idle for a new source.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Ask the element to start playing.
    pub fn play(&mut self) -> Result<(), CommandError> {
        let result = self.media.play();
        Self::forwarded("play", result)
    }

    /// Ask the element to pause.
    pub fn pause(&mut self) -> Result<(), CommandError> {
        let result = self.media.pause();
        Self::forwarded("pause", result)
    }

    /// Ask the element to seek.
    ///
    /// Times past the duration are forwarded unchanged; only non-finite
    /// times are refused here.
    pub fn seek(&mut self, time: f64) -> Result<(), CommandError> {
        if !time.is_finite() {
            return Err(CommandError::InvalidTime(time));
        }
        let result = self.media.seek(time);
        Self::forwarded("seek", result)
    }

    /// Ask the element to change volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) -> Result<(), CommandError> {
        if volume.is_nan() {
            return Err(CommandError::InvalidVolume(volume));
        }
        let result = self.media.set_volume(volume.clamp(0.0, 1.0));
        Self::forwarded("set_volume", result)
    }

    fn forwarded(command: &'static str, result: Result<(), MediaError>) -> Result<(), CommandError> {
        result.map_err(|source| {
            tracing::warn!(command, error = %source, "media command rejected");
            CommandError::Rejected { command, source }
        })
    }
}
