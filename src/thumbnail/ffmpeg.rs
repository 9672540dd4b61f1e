//! ffmpeg frame extractor.

use std::path::Path;
use std::process::{Command, Stdio};

use super::extractor::{ExtractionError, FrameExtractor};
use crate::config::ThumbnailConfig;
use crate::player::MediaSource;

/// Frame extractor that runs the `ffmpeg` binary once per request.
///
/// Every run opens the source independently, so extraction never touches
/// the position of the main playback element.
pub struct FfmpegExtractor {
    binary: String,
    source: String,
    width: u32,
    height: u32,
    qscale: u8,
}

impl FfmpegExtractor {
    /// Create an extractor for `source` using the thumbnail settings.
    pub fn new(source: &MediaSource, config: &ThumbnailConfig) -> Self {
        Self {
            binary: config.ffmpeg_path.clone(),
            source: source.as_str().to_string(),
            width: config.width,
            height: config.height,
            qscale: qscale_for(config.jpeg_quality),
        }
    }

    /// Check if the ffmpeg binary can be run.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Fail early when there is nothing to decode yet.
    ///
    /// URLs (`scheme://...`) are left for ffmpeg to resolve.
    fn check_source(&self) -> Result<(), ExtractionError> {
        if self.source.trim().is_empty() {
            return Err(ExtractionError::NotReady("no media source".to_string()));
        }
        if !self.source.contains("://") && !Path::new(&self.source).exists() {
            return Err(ExtractionError::NotReady(format!(
                "{} does not exist",
                self.source
            )));
        }
        Ok(())
    }

    fn args(&self, time: f64) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            // Input seeking: -ss before -i
            "-ss".to_string(),
            format!("{:.3}", time),
            "-i".to_string(),
            self.source.clone(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-vf".to_string(),
            format!("scale={}:{}", self.width, self.height),
            "-q:v".to_string(),
            self.qscale.to_string(),
            "-f".to_string(),
            "image2pipe".to_string(),
            "-vcodec".to_string(),
            "mjpeg".to_string(),
            "-".to_string(),
        ]
    }
}

impl FrameExtractor for FfmpegExtractor {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError> {
        if !time.is_finite() || time < 0.0 {
            return Err(ExtractionError::OutOfRange { time });
        }
        self.check_source()?;

        let output = Command::new(&self.binary)
            .args(self.args(time))
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(ExtractionError::Failed {
                tool: "ffmpeg",
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // ffmpeg exits 0 with no frame when seeking past the end
        if output.stdout.is_empty() {
            return Err(ExtractionError::OutOfRange { time });
        }

        Ok(output.stdout)
    }
}

/// Map a 0.0-1.0 JPEG quality onto ffmpeg's 2 (best) to 31 (worst) qscale.
fn qscale_for(quality: f32) -> u8 {
    let quality = if quality.is_finite() {
        quality.clamp(0.0, 1.0)
    } else {
        0.5
    };
    (2.0 + (1.0 - quality) * 29.0).round() as u8
}
