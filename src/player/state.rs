//! Player state management
//!
//! Contains the central `PlaybackState` struct that mirrors what the media
//! element has reported, as well as the phase and change types shared with
//! the store.

use crate::cue::{find_active_chapter, find_active_subtitle, Cue};
use crate::player::media::MediaEvent;
use crate::player::scrub::progress_percent;

/// Lifecycle phase of a playback session.
///
/// `Idle → Ready → {Playing ⇄ Paused} → Idle` (on source change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No metadata yet
    Idle,
    /// Metadata loaded, not playing
    Ready,
    Playing,
    Paused,
}

/// A change produced by applying an event.
///
/// Consumers use these to update only what changed.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    Phase(PlaybackPhase),
    Duration(f64),
    Time(f64),
    Volume(f64),
    /// The active chapter changed (None when between or outside chapters)
    Chapter(Option<Cue>),
    Subtitles,
    Chapters,
}

/// Central playback state for one session.
///
/// Only changed through [`PlaybackState::apply`] and the cue setters. The
/// active subtitle is derived on read; the active chapter is memoized and
/// only reported when it differs.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    phase: PlaybackPhase,
    current_time: f64,
    duration: Option<f64>,
    volume: f64,
    subtitles: Vec<Cue>,
    chapters: Vec<Cue>,
    active_chapter: Option<Cue>,
}

impl PlaybackState {
    /// Create an idle state at full volume.
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            subtitles: Vec::new(),
            chapters: Vec::new(),
            active_chapter: None,
        }
    }

    /// Apply an event reported by the media element.
    ///
    /// # Returns
    /// The changes the event caused, empty if it changed nothing
    pub fn apply(&mut self, event: MediaEvent) -> Vec<StateChange> {
        let mut changes = Vec::new();

        match event {
            MediaEvent::LoadedMetadata { duration } => {
                let duration = (duration.is_finite() && duration >= 0.0).then_some(duration);
                if duration != self.duration {
                    self.duration = duration;
                    if let Some(d) = duration {
                        changes.push(StateChange::Duration(d));
                    }
                }
                self.set_phase(PlaybackPhase::Ready, &mut changes);
            }
            MediaEvent::Play => self.set_phase(PlaybackPhase::Playing, &mut changes),
            MediaEvent::Pause => self.set_phase(PlaybackPhase::Paused, &mut changes),
            MediaEvent::TimeUpdate { time } => {
                if !time.is_finite() {
                    tracing::trace!(time, "ignoring non-finite time update");
                    return changes;
                }
                // Not clamped to duration: out-of-range seeks are shown as reported
                self.current_time = time;
                changes.push(StateChange::Time(time));
                self.refresh_chapter(&mut changes);
            }
            MediaEvent::VolumeChange { volume } => {
                if volume.is_finite() {
                    let volume = volume.clamp(0.0, 1.0);
                    if volume != self.volume {
                        self.volume = volume;
                        changes.push(StateChange::Volume(volume));
                    }
                }
            }
        }

        changes
    }

    /// Replace the subtitle set. Resets the active-chapter memo and
    /// re-reports the chapter at the current time.
    pub fn set_subtitles(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.subtitles = cues;
        let mut changes = vec![StateChange::Subtitles];
        self.reset_chapter_memo(&mut changes);
        changes
    }

    /// Replace the chapter set and resolve the active chapter at the
    /// current time, so a paused player stays coherent without a tick.
    pub fn set_chapters(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.chapters = cues;
        let mut changes = vec![StateChange::Chapters];
        self.reset_chapter_memo(&mut changes);
        changes
    }

    /// Return to `Idle` for a new source. Volume is kept.
    pub fn reset(&mut self) {
        *self = Self {
            volume: self.volume,
            ..Self::new()
        };
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Last reported playback time in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration in seconds, once metadata has loaded.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn subtitles(&self) -> &[Cue] {
        &self.subtitles
    }

    pub fn chapters(&self) -> &[Cue] {
        &self.chapters
    }

    pub fn active_chapter(&self) -> Option<&Cue> {
        self.active_chapter.as_ref()
    }

    /// The subtitle showing at the current time, derived on every call.
    pub fn active_subtitle(&self) -> Option<&Cue> {
        find_active_subtitle(&self.subtitles, self.current_time)
    }

    /// Playback progress in percent, 0 while the duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration.unwrap_or(0.0))
    }

    fn set_phase(&mut self, phase: PlaybackPhase, changes: &mut Vec<StateChange>) {
        if self.phase != phase {
            tracing::trace!(from = ?self.phase, to = ?phase, "playback phase");
            self.phase = phase;
            changes.push(StateChange::Phase(phase));
        }
    }

    fn refresh_chapter(&mut self, changes: &mut Vec<StateChange>) {
        let chapter = find_active_chapter(&self.chapters, self.current_time);
        if chapter != self.active_chapter.as_ref() {
            self.active_chapter = chapter.cloned();
            changes.push(StateChange::Chapter(self.active_chapter.clone()));
        }
    }

    /// Forget the memoized chapter and resolve it again. A chapter found
    /// at the current time is always reported, even if it is unchanged.
    fn reset_chapter_memo(&mut self, changes: &mut Vec<StateChange>) {
        let previous = self.active_chapter.take();
        self.refresh_chapter(changes);
        if previous.is_some() && self.active_chapter.is_none() {
            changes.push(StateChange::Chapter(None));
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
