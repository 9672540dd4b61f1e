//! Player façade.
//!
//! [`Player`] ties the playback store to the session of the currently loaded
//! source. A session owns everything scoped to one source: the thumbnail
//! cache with its extraction worker, and the hover tracker for the seek
//! preview. Loading another source tears the old session down first, so no
//! frame decoded for one source is ever served for another.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ThumbnailConfig};
use crate::cue::{collect_chapter_markers, ChapterMarker, Cue};
use crate::player::media::{MediaElement, MediaEvent, MediaSource};
use crate::player::scrub::{fraction_to_time, HoverPreview, HoverTracker};
use crate::player::state::{PlaybackState, StateChange};
use crate::player::store::{CommandError, PlaybackStore};
use crate::thumbnail::{FfmpegExtractor, FrameExtractor, Thumbnail, ThumbnailCache, ThumbnailLookup};

/// Builds the frame extractor for a newly loaded source.
pub type ExtractorFactory = Box<dyn FnMut(&MediaSource, &ThumbnailConfig) -> Box<dyn FrameExtractor>>;

/// State scoped to one loaded media source.
pub struct Session {
    thumbnails: ThumbnailCache,
    hover: HoverTracker,
}

impl Session {
    /// Open a session for `source` with a fresh cache and worker.
    pub fn open<E>(source: MediaSource, extractor: E, config: &Config) -> Self
    where
        E: FrameExtractor + 'static,
    {
        Self {
            thumbnails: ThumbnailCache::new(source, extractor, config.thumbnail.max_entries),
            hover: HoverTracker::new(config.scrub.hover_throttle()),
        }
    }

    pub fn source(&self) -> &MediaSource {
        self.thumbnails.source()
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn hover_preview(&self) -> Option<&HoverPreview> {
        self.hover.preview()
    }
}

/// Result of an accepted hover move.
#[derive(Debug, Clone)]
pub struct HoverUpdate {
    pub preview: HoverPreview,
    pub thumbnail: ThumbnailLookup,
}

/// A media element plus its cue tracks and per-source session.
pub struct Player<M> {
    store: PlaybackStore<M>,
    session: Option<Session>,
    extractors: ExtractorFactory,
    config: Config,
}

impl<M: MediaElement> Player<M> {
    /// Create a player that builds extractors with `extractors`.
    pub fn new<F>(media: M, config: Config, extractors: F) -> Self
    where
        F: FnMut(&MediaSource, &ThumbnailConfig) -> Box<dyn FrameExtractor> + 'static,
    {
        Self {
            store: PlaybackStore::new(media),
            session: None,
            extractors: Box::new(extractors),
            config,
        }
    }

    /// Create a player that extracts preview frames with ffmpeg.
    pub fn with_ffmpeg(media: M, config: Config) -> Self {
        Self::new(media, config, |source, thumbnail| {
            Box::new(FfmpegExtractor::new(source, thumbnail))
        })
    }

    /// Switch to a new media source.
    ///
    /// The previous session is torn down before anything for the new
    /// source is created, and playback state returns to idle.
    pub fn load_source(&mut self, source: MediaSource) {
        self.unload();
        tracing::debug!(source = %source, "loading media source");
        let extractor = (self.extractors)(&source, &self.config.thumbnail);
        self.session = Some(Session::open(source, extractor, &self.config));
    }

    /// Tear down the current session, if any.
    pub fn unload(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(source = %session.source(), "unloading media source");
        }
        self.store.reset();
    }

    pub fn source(&self) -> Option<&MediaSource> {
        self.session.as_ref().map(Session::source)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> &PlaybackState {
        self.store.state()
    }

    pub fn store(&self) -> &PlaybackStore<M> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn handle_event(&mut self, event: MediaEvent) -> Vec<StateChange> {
        self.store.handle_event(event)
    }

    pub fn set_subtitles(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.store.set_subtitles(cues)
    }

    pub fn set_chapters(&mut self, cues: Vec<Cue>) -> Vec<StateChange> {
        self.store.set_chapters(cues)
    }

    /// Chapter markers for the progress bar at the current duration.
    pub fn chapter_markers(&self) -> Vec<ChapterMarker> {
        collect_chapter_markers(self.state().chapters(), self.duration())
    }

    /// Pointer moved over the progress bar.
    ///
    /// # Returns
    /// The preview and its thumbnail lookup, or `None` when the move was
    /// throttled or no source is loaded
    pub fn hover(&mut self, fraction: f64, now: Instant) -> Option<HoverUpdate> {
        let duration = self.duration();
        let session = self.session.as_mut()?;
        let preview = session.hover.update(fraction, duration, now)?.clone();
        let thumbnail = session.thumbnails.get(preview.time);
        Some(HoverUpdate { preview, thumbnail })
    }

    /// Pointer left the progress bar.
    pub fn leave_hover(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.hover.leave();
        }
    }

    /// Look up the preview frame for `time` directly.
    pub fn thumbnail(&mut self, time: f64) -> ThumbnailLookup {
        match self.session.as_mut() {
            Some(session) => session.thumbnails.get(time),
            None => ThumbnailLookup::Unavailable,
        }
    }

    /// Collect finished extractions; see [`ThumbnailCache::poll`].
    pub fn poll_thumbnail(&mut self) -> Option<ThumbnailLookup> {
        self.session.as_mut()?.thumbnails.poll()
    }

    /// Block for the latest requested frame, up to the configured timeout.
    pub fn wait_thumbnail(&mut self) -> Option<Arc<Thumbnail>> {
        let timeout = self.config.thumbnail.wait_timeout();
        self.session.as_mut()?.thumbnails.wait(timeout)
    }

    /// Seek to a position along the progress bar.
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Result<(), CommandError> {
        let time = fraction_to_time(fraction, self.duration());
        self.store.seek(time)
    }

    pub fn play(&mut self) -> Result<(), CommandError> {
        self.store.play()
    }

    pub fn pause(&mut self) -> Result<(), CommandError> {
        self.store.pause()
    }

    pub fn seek(&mut self, time: f64) -> Result<(), CommandError> {
        self.store.seek(time)
    }

    pub fn set_volume(&mut self, volume: f64) -> Result<(), CommandError> {
        self.store.set_volume(volume)
    }

    fn duration(&self) -> f64 {
        self.state().duration().unwrap_or(0.0)
    }
}
