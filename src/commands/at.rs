//! At command handler

use std::path::Path;

use anyhow::{Context, Result};

use cueplay::cue::{find_active_chapter, find_active_subtitle, parse, parse_chapters};
use cueplay::time::format_time;

use super::read_track;

/// Print the cue active at `time`.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, time: f64, chapters: bool) -> Result<()> {
    let raw = read_track(file)?;
    let (cues, active) = if chapters {
        let cues = parse_chapters(&raw).with_context(|| format!("Invalid track {}", file.display()))?;
        let active = find_active_chapter(&cues, time).cloned();
        (cues, active)
    } else {
        let cues = parse(&raw).with_context(|| format!("Invalid track {}", file.display()))?;
        let active = find_active_subtitle(&cues, time).cloned();
        (cues, active)
    };
    tracing::debug!(cues = cues.len(), time, "resolving active cue");

    match active {
        Some(cue) => println!(
            "[{}] {} --> {}  {}",
            cue.index(),
            format_time(cue.start_time()),
            format_time(cue.end_time()),
            cue.text()
        ),
        None => println!("No active cue at {}", format_time(time)),
    }
    Ok(())
}
