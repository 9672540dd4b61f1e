//! Configuration for cueplay.
//!
//! Loaded from TOML at `$CUEPLAY_CONFIG`, falling back to
//! `<config dir>/cueplay/config.toml`. A missing file means defaults, and
//! every section and field may be omitted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CUEPLAY_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thumbnail: ThumbnailConfig,
    pub scrub: ScrubConfig,
}

/// Thumbnail extraction and caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Preview width in pixels
    pub width: u32,
    /// Preview height in pixels
    pub height: u32,
    /// JPEG quality from 0.0 (smallest) to 1.0 (best)
    pub jpeg_quality: f32,
    /// ffmpeg binary used for frame extraction
    pub ffmpeg_path: String,
    /// Maximum cached frames; unset keeps every frame for the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
    /// How long blocking callers wait for a frame
    pub wait_timeout_ms: u64,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 90,
            jpeg_quality: 0.5,
            ffmpeg_path: "ffmpeg".to_string(),
            max_entries: None,
            wait_timeout_ms: 5000,
        }
    }
}

impl ThumbnailConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

/// Progress bar scrubbing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Minimum interval between hover preview updates
    pub hover_throttle_ms: u64,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            hover_throttle_ms: 50,
        }
    }
}

impl ScrubConfig {
    pub fn hover_throttle(&self) -> Duration {
        Duration::from_millis(self.hover_throttle_ms)
    }
}

impl Config {
    /// Path of the config file that [`Config::load`] reads.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cueplay").join("config.toml"))
    }

    /// Load the configuration, using defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
