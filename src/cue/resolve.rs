//! Active cue lookup.
//!
//! Both lookups scan in sequence order and return the first match, so
//! overlapping cues resolve to whichever appeared first in the source.

use super::Cue;

/// Find the subtitle showing at `time`.
///
/// A subtitle is active on `[start, end]`, inclusive at both ends. Only one
/// subtitle is returned even when ranges overlap.
pub fn find_active_subtitle(cues: &[Cue], time: f64) -> Option<&Cue> {
    cues.iter()
        .find(|cue| time >= cue.start_time() && time <= cue.end_time())
}

/// Find the chapter containing `time`.
///
/// A chapter is active on `[start, end)`, so at the boundary between two
/// adjacent chapters only the later one matches.
pub fn find_active_chapter(cues: &[Cue], time: f64) -> Option<&Cue> {
    cues.iter()
        .find(|cue| cue.start_time() <= time && time < cue.end_time())
}
