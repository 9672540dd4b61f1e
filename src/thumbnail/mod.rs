//! Time-indexed preview frame cache.
//!
//! Maps a scrub time to a preview frame without decoding again for times
//! already seen. Keys are whole seconds (`floor(time)`), so 1.2 s and 1.8 s
//! share a frame.
//!
//! Misses are handed to a background worker that owns the cache's
//! [`FrameExtractor`]. Each request carries the time it was made for, and a
//! result is only surfaced if its key still matches the most recent
//! [`ThumbnailCache::get`] call. Results for superseded requests are kept in
//! the cache but never reported as the current frame.
//!
//! A cache belongs to one media source. Dropping it closes the worker's
//! request channel; the worker exits after its current extraction.

mod extractor;
mod ffmpeg;
mod worker;

pub use extractor::{ExtractionError, FrameExtractor};
pub use ffmpeg::FfmpegExtractor;
pub use worker::{spawn_worker, worker_loop, LoadResult};

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lru::LruCache;

use crate::player::MediaSource;

/// Cache key for a time: whole seconds, rounded down.
///
/// # Returns
/// `None` for negative or non-finite times
pub fn cache_key(time: f64) -> Option<u64> {
    if time.is_finite() && time >= 0.0 {
        Some(time.floor() as u64)
    } else {
        None
    }
}

/// An encoded preview frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    time: f64,
    key: u64,
    data: Vec<u8>,
}

impl Thumbnail {
    /// The exact time the frame was extracted at.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The whole-second cache key.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// JPEG bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The frame as a `data:` URL for image elements.
    pub fn to_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.data))
    }
}

/// Outcome of a thumbnail lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailLookup {
    /// Frame is cached
    Ready(Arc<Thumbnail>),
    /// Extraction is in progress; resolve with `poll` or `wait`
    Pending,
    /// No frame can be produced; show a placeholder
    Unavailable,
}

impl ThumbnailLookup {
    pub fn frame(&self) -> Option<&Arc<Thumbnail>> {
        match self {
            Self::Ready(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Tag carried by every extraction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractRequest {
    /// Monotonic request number, for logging
    pub seq: u64,
    /// Time the frame was requested at
    pub time: f64,
    /// Cache key of `time`
    pub key: u64,
}

/// Session-scoped thumbnail cache with a dedicated extraction worker.
pub struct ThumbnailCache {
    source: MediaSource,
    entries: LruCache<u64, Arc<Thumbnail>>,
    requests: Option<Sender<ExtractRequest>>,
    results: Option<Receiver<LoadResult<ExtractRequest, Vec<u8>>>>,
    in_flight: HashSet<u64>,
    latest: Option<u64>,
    next_seq: u64,
}

impl ThumbnailCache {
    /// Create a cache for `source`, moving `extractor` onto its worker.
    ///
    /// # Arguments
    /// * `source` - Media source this cache belongs to
    /// * `extractor` - Decoder owned exclusively by this cache
    /// * `max_entries` - Optional LRU bound; `None` keeps every frame
    pub fn new<E>(source: MediaSource, mut extractor: E, max_entries: Option<usize>) -> Self
    where
        E: FrameExtractor + 'static,
    {
        let entries = match max_entries.and_then(NonZeroUsize::new) {
            Some(cap) => LruCache::new(cap),
            None => LruCache::unbounded(),
        };

        let worker = spawn_worker("thumbnail-extractor", move |request: &ExtractRequest| {
            match extractor.extract(request.time) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::debug!(
                        seq = request.seq,
                        time = request.time,
                        extractor = extractor.name(),
                        error = %e,
                        "thumbnail extraction failed"
                    );
                    None
                }
            }
        });
        let (requests, results) = match worker {
            Some((tx, rx)) => (Some(tx), Some(rx)),
            None => (None, None),
        };

        tracing::debug!(source = %source, "thumbnail cache created");

        Self {
            source,
            entries,
            requests,
            results,
            in_flight: HashSet::new(),
            latest: None,
            next_seq: 0,
        }
    }

    /// The media source this cache belongs to.
    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    /// Look up the frame for `time`, starting an extraction on a miss.
    ///
    /// The call marks `time` as the most recently requested time, which
    /// decides whether later results are surfaced.
    pub fn get(&mut self, time: f64) -> ThumbnailLookup {
        let Some(key) = cache_key(time) else {
            self.latest = None;
            return ThumbnailLookup::Unavailable;
        };
        self.latest = Some(key);

        if let Some(frame) = self.entries.get(&key) {
            return ThumbnailLookup::Ready(Arc::clone(frame));
        }
        if self.in_flight.contains(&key) {
            return ThumbnailLookup::Pending;
        }

        let Some(requests) = &self.requests else {
            return ThumbnailLookup::Unavailable;
        };
        let request = ExtractRequest {
            seq: self.next_seq,
            time,
            key,
        };
        self.next_seq += 1;

        if requests.send(request).is_err() {
            tracing::warn!(source = %self.source, "thumbnail worker has stopped");
            self.requests = None;
            return ThumbnailLookup::Unavailable;
        }
        self.in_flight.insert(key);
        ThumbnailLookup::Pending
    }

    /// Collect finished extractions without blocking.
    ///
    /// # Returns
    /// The resolution of the most recent request if it arrived, `None`
    /// if nothing relevant arrived
    pub fn poll(&mut self) -> Option<ThumbnailLookup> {
        let mut resolved = None;
        loop {
            let Some(result) = self.results.as_ref().and_then(|rx| rx.try_recv().ok()) else {
                break;
            };
            if let Some(lookup) = self.accept(result) {
                resolved = Some(lookup);
            }
        }
        resolved
    }

    /// Block until the most recent request resolves or `timeout` passes.
    ///
    /// # Returns
    /// The frame, or `None` on failure, timeout, or when nothing was requested
    pub fn wait(&mut self, timeout: Duration) -> Option<Arc<Thumbnail>> {
        let key = self.latest?;
        if let Some(frame) = self.entries.get(&key) {
            return Some(Arc::clone(frame));
        }
        if !self.in_flight.contains(&key) {
            return None;
        }

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let result = self.results.as_ref()?.recv_timeout(remaining).ok()?;
            if let Some(lookup) = self.accept(result) {
                return lookup.frame().cloned();
            }
        }
    }

    /// Whether a frame for `time` is cached.
    pub fn contains(&self, time: f64) -> bool {
        cache_key(time).is_some_and(|key| self.entries.contains(&key))
    }

    /// Number of cached frames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a finished extraction and decide whether it is current.
    fn accept(&mut self, result: LoadResult<ExtractRequest, Vec<u8>>) -> Option<ThumbnailLookup> {
        let request = result.key;
        self.in_flight.remove(&request.key);
        let current = self.latest == Some(request.key);

        let lookup = match result.value {
            Some(data) => {
                let frame = Arc::new(Thumbnail {
                    time: request.time,
                    key: request.key,
                    data,
                });
                if current || !self.would_evict_latest(request.key) {
                    self.entries.put(request.key, Arc::clone(&frame));
                }
                ThumbnailLookup::Ready(frame)
            }
            None => ThumbnailLookup::Unavailable,
        };

        if current {
            Some(lookup)
        } else {
            tracing::trace!(
                seq = request.seq,
                key = request.key,
                latest = ?self.latest,
                "ignoring superseded thumbnail"
            );
            None
        }
    }

    /// Whether storing `key` would push the latest requested frame out.
    ///
    /// The latest frame is promoted first, so only a cache with no other
    /// entry to evict reports true.
    fn would_evict_latest(&mut self, key: u64) -> bool {
        let Some(latest) = self.latest else {
            return false;
        };
        if self.entries.contains(&key) || self.entries.len() < self.entries.cap().get() {
            return false;
        }
        self.entries.promote(&latest);
        self.entries
            .peek_lru()
            .is_some_and(|(lru_key, _)| *lru_key == latest)
    }
}

impl Drop for ThumbnailCache {
    fn drop(&mut self) {
        tracing::debug!(
            source = %self.source,
            entries = self.entries.len(),
            "thumbnail cache torn down"
        );
    }
}
