//! Integration tests for the thumbnail cache

use std::sync::mpsc;
use std::time::Duration;

use cueplay::config::ThumbnailConfig;
use cueplay::thumbnail::{FfmpegExtractor, FrameExtractor, ThumbnailCache, ThumbnailLookup};
use cueplay::MediaSource;

use crate::helpers::{GatedExtractor, LabelExtractor};

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn frames_are_shared_within_a_second() {
    let mut cache = ThumbnailCache::new(
        MediaSource::new("movie.mp4"),
        LabelExtractor {
            label: "movie".to_string(),
        },
        None,
    );

    assert!(cache.get(12.3).is_pending());
    let frame = cache.wait(TIMEOUT).unwrap();
    assert_eq!(frame.data(), b"movie@12.3");

    match cache.get(12.9) {
        ThumbnailLookup::Ready(hit) => assert_eq!(hit.time(), 12.3),
        other => panic!("expected cache hit, got {:?}", other),
    }
    assert!(!cache.contains(13.0));
}

#[test]
fn superseded_frame_is_cached_but_not_surfaced() {
    let (go, gate) = mpsc::channel();
    let mut cache = ThumbnailCache::new(MediaSource::new("movie.mp4"), GatedExtractor { gate }, None);

    assert!(cache.get(1.0).is_pending());
    assert!(cache.get(2.0).is_pending());
    go.send(()).unwrap();
    go.send(()).unwrap();

    let frame = cache.wait(TIMEOUT).unwrap();
    assert_eq!(frame.key(), 2);
    assert!(cache.contains(1.0));
    assert_eq!(cache.len(), 2);
}

#[test]
fn bounded_cache_evicts_least_recent() {
    let mut cache = ThumbnailCache::new(
        MediaSource::new("movie.mp4"),
        LabelExtractor {
            label: "movie".to_string(),
        },
        Some(2),
    );

    for time in [1.0, 2.0, 3.0] {
        cache.get(time);
        assert!(cache.wait(TIMEOUT).is_some());
    }

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(1.0));
    assert!(cache.contains(3.0));
}

#[test]
fn missing_ffmpeg_yields_no_frame() {
    let config = ThumbnailConfig {
        ffmpeg_path: "/nonexistent/ffmpeg".to_string(),
        ..ThumbnailConfig::default()
    };
    let source = MediaSource::new("movie.mp4");
    let extractor = FfmpegExtractor::new(&source, &config);
    assert!(!extractor.is_available());
    assert_eq!(extractor.name(), "ffmpeg");

    let mut cache = ThumbnailCache::new(source, extractor, None);
    assert!(cache.get(1.0).is_pending());
    assert!(cache.wait(TIMEOUT).is_none());
    assert!(cache.is_empty());
}
