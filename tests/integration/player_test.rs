//! Integration tests for the player façade

use std::time::{Duration, Instant};

use cueplay::cue::{parse, parse_chapters};
use cueplay::player::{CommandError, PlaybackPhase, StateChange};
use cueplay::{Config, MediaError, MediaEvent, MediaSource, Player};

use crate::helpers::{load_fixture, FakeMedia, LabelExtractor};

fn player_with(media: FakeMedia) -> Player<FakeMedia> {
    Player::new(media, Config::default(), |source, _| {
        Box::new(LabelExtractor {
            label: source.to_string(),
        })
    })
}

#[test]
fn playback_session_tracks_chapters_and_subtitles() {
    let mut player = player_with(FakeMedia::default());
    player.load_source(MediaSource::new("talk.mp4"));
    player.set_subtitles(parse(&load_fixture("subtitles.vtt")).unwrap());
    player.set_chapters(parse_chapters(&load_fixture("chapters.vtt")).unwrap());

    player.handle_event(MediaEvent::LoadedMetadata { duration: 240.0 });
    player.handle_event(MediaEvent::Play);
    assert_eq!(player.state().phase(), PlaybackPhase::Playing);

    let changes = player.handle_event(MediaEvent::TimeUpdate { time: 5.0 });
    assert!(changes.contains(&StateChange::Time(5.0)));
    assert_eq!(player.state().active_subtitle().unwrap().text(), "General Kenobi!");
    assert_eq!(player.state().active_chapter().unwrap().text(), "Introduction");

    // Same chapter: no chapter change is reported
    let changes = player.handle_event(MediaEvent::TimeUpdate { time: 6.0 });
    assert!(!changes.iter().any(|c| matches!(c, StateChange::Chapter(_))));

    player.handle_event(MediaEvent::TimeUpdate { time: 60.0 });
    assert_eq!(player.state().active_chapter().unwrap().text(), "The Middle Part");
    assert!(player.state().active_subtitle().is_none());
    assert_eq!(player.state().progress_percent(), 25.0);
}

#[test]
fn rejected_play_leaves_state_unchanged() {
    let mut player = player_with(FakeMedia {
        blocked: true,
        ..FakeMedia::default()
    });
    player.load_source(MediaSource::new("talk.mp4"));
    player.handle_event(MediaEvent::LoadedMetadata { duration: 10.0 });

    let err = player.play().unwrap_err();
    assert!(matches!(
        err,
        CommandError::Rejected {
            command: "play",
            source: MediaError::Blocked(_),
        }
    ));
    assert_eq!(player.state().phase(), PlaybackPhase::Ready);
}

#[test]
fn scrubbing_previews_and_seeks() {
    let mut player = player_with(FakeMedia::default());
    player.load_source(MediaSource::new("talk.mp4"));
    player.handle_event(MediaEvent::LoadedMetadata { duration: 7200.0 });

    let update = player.hover(0.5, Instant::now()).unwrap();
    assert_eq!(update.preview.label, "1:00:00");
    assert!(update.thumbnail.is_pending());
    let frame = player.wait_thumbnail().unwrap();
    assert_eq!(frame.data(), b"talk.mp4@3600.0");
    assert!(frame.to_data_url().starts_with("data:image/jpeg;base64,"));

    player.seek_to_fraction(0.5).unwrap();
    assert_eq!(player.store().media().seeks, vec![3600.0]);
}

#[test]
fn new_source_never_serves_old_frames() {
    let mut player = player_with(FakeMedia::default());
    player.load_source(MediaSource::new("first.mp4"));
    player.thumbnail(5.0);
    assert_eq!(player.wait_thumbnail().unwrap().data(), b"first.mp4@5.0");

    player.load_source(MediaSource::new("second.mp4"));
    assert!(player.thumbnail(5.0).is_pending());
    assert_eq!(player.wait_thumbnail().unwrap().data(), b"second.mp4@5.0");
}

#[test]
fn hover_respects_configured_throttle() {
    let mut config = Config::default();
    config.scrub.hover_throttle_ms = 200;
    let mut player = Player::new(FakeMedia::default(), config, |source, _| {
        Box::new(LabelExtractor {
            label: source.to_string(),
        })
    });
    player.load_source(MediaSource::new("talk.mp4"));
    player.handle_event(MediaEvent::LoadedMetadata { duration: 100.0 });

    let start = Instant::now();
    assert!(player.hover(0.1, start).is_some());
    assert!(player.hover(0.2, start + Duration::from_millis(100)).is_none());
    assert!(player.hover(0.3, start + Duration::from_millis(250)).is_some());
}
