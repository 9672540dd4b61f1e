//! Chapter markers for progress bars.
//!
//! Markers place each chapter's start on the progress bar and carry the
//! tooltip label shown when hovering it.

use serde::Serialize;

use super::Cue;
use crate::time::format_time_pair;

/// A chapter start positioned on the progress bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterMarker {
    /// Chapter start in seconds
    pub time: f64,
    /// Position along the bar in percent (0-100)
    pub position: f64,
    /// Tooltip label, e.g. `Intro (0:00)`
    pub label: String,
}

/// Collect markers for the given chapters.
///
/// The start time in each label is formatted with the same layout as the
/// total duration.
///
/// # Arguments
/// * `chapters` - Chapter cues in source order
/// * `duration` - Total media duration in seconds
///
/// # Returns
/// One marker per chapter, in the same order. Positions are all 0 while the
/// duration is unknown.
pub fn collect_chapter_markers(chapters: &[Cue], duration: f64) -> Vec<ChapterMarker> {
    chapters
        .iter()
        .map(|chapter| {
            let position = if duration.is_finite() && duration > 0.0 {
                (chapter.start_time() / duration * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            let (start, _) = format_time_pair(chapter.start_time(), duration);

            ChapterMarker {
                time: chapter.start_time(),
                position,
                label: format!("{} ({})", chapter.text(), start),
            }
        })
        .collect()
}
