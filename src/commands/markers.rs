//! Markers command handler

use std::path::Path;

use anyhow::{Context, Result};

use cueplay::cue::{collect_chapter_markers, parse_chapters};

use super::read_track;

/// Print where each chapter sits on the progress bar.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, duration: f64) -> Result<()> {
    let raw = read_track(file)?;
    let chapters =
        parse_chapters(&raw).with_context(|| format!("Invalid track {}", file.display()))?;

    for marker in collect_chapter_markers(&chapters, duration) {
        println!("{:>6.2}%  {}", marker.position, marker.label);
    }
    Ok(())
}
