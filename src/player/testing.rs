//! Test doubles for player tests.

use crate::player::media::{MediaElement, MediaError};
use crate::thumbnail::{ExtractionError, FrameExtractor};

/// A command received by [`RecordingMedia`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// Media element that records commands and optionally rejects them all.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub commands: Vec<MediaCommand>,
    pub reject: Option<MediaError>,
}

impl RecordingMedia {
    fn record(&mut self, command: MediaCommand) -> Result<(), MediaError> {
        match &self.reject {
            Some(err) => Err(err.clone()),
            None => {
                self.commands.push(command);
                Ok(())
            }
        }
    }
}

impl MediaElement for RecordingMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        self.record(MediaCommand::Play)
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.record(MediaCommand::Pause)
    }

    fn seek(&mut self, time: f64) -> Result<(), MediaError> {
        self.record(MediaCommand::Seek(time))
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError> {
        self.record(MediaCommand::SetVolume(volume))
    }
}

/// Extractor whose frames name the source and time they came from.
pub struct SourceEchoExtractor {
    pub source: String,
}

impl FrameExtractor for SourceEchoExtractor {
    fn name(&self) -> &'static str {
        "source-echo"
    }

    fn extract(&mut self, time: f64) -> Result<Vec<u8>, ExtractionError> {
        Ok(format!("{}@{:.1}", self.source, time).into_bytes())
    }
}
