//! Thumbnail command handler

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use cueplay::thumbnail::{FfmpegExtractor, ThumbnailCache};
use cueplay::time::format_time;
use cueplay::{Config, MediaSource};

/// Extract the preview frame for `time` and write it to `output`.
#[cfg(not(tarpaulin_include))]
pub fn handle(video: &str, time: f64, output: &Path) -> Result<()> {
    let config = Config::load()?;
    let source = MediaSource::new(video);
    let extractor = FfmpegExtractor::new(&source, &config.thumbnail);
    if !extractor.is_available() {
        bail!(
            "'{}' not found. Install ffmpeg or set thumbnail.ffmpeg_path in the config.",
            config.thumbnail.ffmpeg_path
        );
    }

    let mut cache = ThumbnailCache::new(source, extractor, config.thumbnail.max_entries);
    cache.get(time);
    let Some(frame) = cache.wait(config.thumbnail.wait_timeout()) else {
        bail!("Could not extract a frame at {} from {}", format_time(time), video);
    };

    fs::write(output, frame.data())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote {} ({} bytes, frame at {})",
        output.display(),
        frame.data().len(),
        format_time(frame.time())
    );
    Ok(())
}
