//! Timed cues: WebVTT-like parsing and active-cue resolution.
//!
//! A cue is a text payload bound to a time interval. The same type serves
//! subtitle lines and chapter markers; the difference is only in how the
//! active cue is resolved (see [`resolve`]).
//!
//! # Module Structure
//!
//! - [`timestamp`] - `HH:MM:SS.mmm` timestamp grammar
//! - [`parser`] - line-oriented cue text parser
//! - [`resolve`] - active subtitle / active chapter lookup
//! - [`markers`] - chapter marker positions for progress bars

pub mod markers;
pub mod parser;
pub mod resolve;
pub mod timestamp;

use serde::Serialize;

pub use markers::{collect_chapter_markers, ChapterMarker};
pub use parser::{parse, parse_chapters};
pub use resolve::{find_active_chapter, find_active_subtitle};
pub use timestamp::parse_timestamp;

/// A text payload bound to a time range.
///
/// Cues are only produced by the parser and are immutable afterwards.
/// `end_time` is always strictly greater than `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    index: usize,
    start_time: f64,
    end_time: f64,
    text: String,
}

impl Cue {
    pub(crate) fn new(index: usize, start_time: f64, end_time: f64, text: String) -> Self {
        debug_assert!(end_time > start_time);
        Self {
            index,
            start_time,
            end_time,
            text,
        }
    }

    /// Position of the cue within its parse, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Start of the cue in seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// End of the cue in seconds.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the cue in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Errors that fail a whole cue parse.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: malformed timestamp '{value}'")]
    MalformedTimestamp { line: usize, value: String },

    #[error("line {line}: timing line has no {side} timestamp")]
    MissingTimestamp { line: usize, side: &'static str },

    #[error("line {line}: cue end {end}s is not after its start {start}s")]
    EmptyRange { line: usize, start: f64, end: f64 },
}

impl FormatError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedTimestamp { line, .. }
            | Self::MissingTimestamp { line, .. }
            | Self::EmptyRange { line, .. } => *line,
        }
    }
}
