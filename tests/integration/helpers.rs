//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;
use std::sync::mpsc;

use cueplay::thumbnail::{ExtractionError, FrameExtractor};
use cueplay::{MediaElement, MediaError};

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// A cueplay command that ignores any user config and logs nothing.
pub fn cueplay() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cueplay"));
    cmd.env("CUEPLAY_CONFIG", fixture_path("no-such-config.toml"))
        .env("CUEPLAY_LOG", "off");
    cmd
}

/// Run cueplay and capture (stdout, stderr, exit code).
pub fn run_cueplay(args: &[&str]) -> (String, String, i32) {
    let output = cueplay()
        .args(args)
        .output()
        .expect("Failed to execute cueplay");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Media element that accepts every command and remembers seeks.
#[derive(Debug, Default)]
pub struct FakeMedia {
    pub seeks: Vec<f64>,
    pub blocked: bool,
}

impl MediaElement for FakeMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        if self.blocked {
            return Err(MediaError::Blocked("user gesture required".to_string()));
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        Ok(())
    }

    fn seek(&mut self, time: f64) -> Result<(), MediaError> {
        self.seeks.push(time);
        Ok(())
    }

    fn set_volume(&mut self, _volume: f64) -> Result<(), MediaError> {
        Ok(())
    }
}

/// Extractor that renders each frame as `<label>@<time>`.
pub struct LabelExtractor {
    pub label: String,
}

impl FrameExtractor for LabelExtractor {
    fn name(&self) -> &'static str {
        "label"
    }

    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError> {
        Ok(format!("{}@{:.1}", self.label, time).into_bytes())
    }
}

/// Extractor that blocks until released, one frame per release.
pub struct GatedExtractor {
    pub gate: mpsc::Receiver<()>,
}

impl FrameExtractor for GatedExtractor {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError> {
        self.gate
            .recv()
            .map_err(|_| ExtractionError::NotReady("gate closed".to_string()))?;
        Ok(format!("{:.1}", time).into_bytes())
    }
}
