//! Subcommand handlers

pub mod at;
pub mod config;
pub mod format;
pub mod markers;
pub mod parse;
pub mod thumbnail;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read a track file, with a helpful error when it does not exist.
pub fn read_track(file: &Path) -> Result<String> {
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
