//! Parse command handler

use std::path::Path;

use anyhow::{Context, Result};

use cueplay::cue::{parse, parse_chapters};
use cueplay::time::format_time;

use super::read_track;

/// List every cue in a track.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, chapters: bool, json: bool) -> Result<()> {
    let raw = read_track(file)?;
    let cues = if chapters {
        parse_chapters(&raw)
    } else {
        parse(&raw)
    }
    .with_context(|| format!("Invalid track {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cues)?);
        return Ok(());
    }

    for cue in &cues {
        println!(
            "{:>4}  {} --> {}  {}",
            cue.index(),
            format_time(cue.start_time()),
            format_time(cue.end_time()),
            cue.text()
        );
    }
    println!("{} cue(s)", cues.len());
    Ok(())
}
