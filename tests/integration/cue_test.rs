//! Integration tests for cue parsing and resolution

use cueplay::cue::{
    collect_chapter_markers, find_active_chapter, find_active_subtitle, parse, parse_chapters,
};
use cueplay::FormatError;

use crate::helpers::load_fixture;

#[test]
fn subtitle_fixture_parses_in_order() {
    let cues = parse(&load_fixture("subtitles.vtt")).unwrap();

    let texts: Vec<&str> = cues.iter().map(|c| c.text()).collect();
    assert_eq!(
        texts,
        vec!["Hello there.", "General Kenobi!", "You are a bold one."]
    );
    let indices: Vec<usize> = cues.iter().map(|c| c.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(cues[1].end_time(), 7.5);
    assert_eq!(cues[2].end_time(), 12.25);
}

#[test]
fn chapter_fixture_strips_ids() {
    let chapters = parse_chapters(&load_fixture("chapters.vtt")).unwrap();
    let titles: Vec<&str> = chapters.iter().map(|c| c.text()).collect();
    assert_eq!(titles, vec!["Introduction", "The Middle Part", "Credits"]);
}

#[test]
fn malformed_fixture_fails_whole_parse() {
    let err = parse(&load_fixture("malformed.vtt")).unwrap_err();
    assert_eq!(
        err,
        FormatError::MalformedTimestamp {
            line: 6,
            value: "00:00:xx.000".to_string(),
        }
    );
}

#[test]
fn shared_boundary_resolves_differently_per_track_kind() {
    let raw = load_fixture("subtitles.vtt");
    let subtitles = parse(&raw).unwrap();
    let chapters = parse_chapters(&raw).unwrap();

    // Subtitle bounds are inclusive, so the earlier cue wins at 4.0
    assert_eq!(find_active_subtitle(&subtitles, 4.0).unwrap().index(), 0);
    // Chapter ends are exclusive, so the later chapter starts at 4.0
    assert_eq!(find_active_chapter(&chapters, 4.0).unwrap().index(), 1);
}

#[test]
fn gaps_resolve_to_nothing() {
    let cues = parse(&load_fixture("subtitles.vtt")).unwrap();
    assert!(find_active_subtitle(&cues, 8.0).is_none());
    assert!(find_active_subtitle(&cues, 0.5).is_none());
    assert!(find_active_subtitle(&cues, 100.0).is_none());
}

#[test]
fn markers_place_chapters_on_bar() {
    let chapters = parse_chapters(&load_fixture("chapters.vtt")).unwrap();
    let markers = collect_chapter_markers(&chapters, 240.0);

    let positions: Vec<f64> = markers.iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0.0, 25.0, 62.5]);
    assert_eq!(markers[2].label, "Credits (2:30)");
}
