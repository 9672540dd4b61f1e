//! Line-oriented cue text parser.
//!
//! The input is WebVTT-like text: a header line followed by blocks of a
//! timing line (`start --> end`) and a text line. The parser is a two-state
//! scan: it looks for a timing line, then takes the next non-empty line as
//! that cue's text.
//!
//! Indices count sealed cues, so they stay dense: a timing line that never
//! receives text does not consume an index.
//!
//! Only the first text line of a cue is captured. Continuation lines of a
//! multi-line cue body are ignored, as are cue identifiers, `NOTE` and
//! `STYLE` blocks and anything else that is not a timing line.

use super::timestamp::parse_timestamp;
use super::{Cue, FormatError};

/// Parse cue text into cues in source order.
///
/// The first line is the header and is skipped without validation. A
/// malformed timing line fails the whole parse; no partial result is
/// returned. Empty input yields an empty vector.
///
/// # Arguments
/// * `raw` - Complete cue file contents
///
/// # Returns
/// Cues with dense indices starting at 0
pub fn parse(raw: &str) -> Result<Vec<Cue>, FormatError> {
    parse_with(raw, |line| line.to_string())
}

/// Parse chapter cue text.
///
/// Same grammar as [`parse`], but a leading numeric chapter id is dropped
/// from each title (`"1.0 Intro"` becomes `"Intro"`).
pub fn parse_chapters(raw: &str) -> Result<Vec<Cue>, FormatError> {
    parse_with(raw, strip_chapter_id)
}

fn parse_with(raw: &str, text_of: impl Fn(&str) -> String) -> Result<Vec<Cue>, FormatError> {
    let mut cues = Vec::new();
    let mut pending: Option<(f64, f64)> = None;

    for (line_idx, line) in raw.trim().lines().enumerate().skip(1) {
        let line = line.trim();

        if line.contains("-->") {
            // A timing line with no text yet is replaced by the next one
            pending = Some(parse_timing_line(line, line_idx + 1)?);
        } else if !line.is_empty() {
            if let Some((start, end)) = pending.take() {
                cues.push(Cue::new(cues.len(), start, end, text_of(line)));
            }
        }
    }

    tracing::debug!(count = cues.len(), "parsed cues");
    Ok(cues)
}

/// Parse `start --> end [settings]` into a (start, end) pair in seconds.
fn parse_timing_line(line: &str, line_num: usize) -> Result<(f64, f64), FormatError> {
    let (start_str, rest) = line.split_once("-->").unwrap_or((line, ""));

    let start_str = start_str.trim();
    if start_str.is_empty() {
        return Err(FormatError::MissingTimestamp {
            line: line_num,
            side: "start",
        });
    }

    // Cue settings such as `align:start` may follow the end timestamp
    let end_str = rest
        .split_whitespace()
        .next()
        .ok_or(FormatError::MissingTimestamp {
            line: line_num,
            side: "end",
        })?;

    let start = timestamp_at(start_str, line_num)?;
    let end = timestamp_at(end_str, line_num)?;

    if end <= start {
        return Err(FormatError::EmptyRange {
            line: line_num,
            start,
            end,
        });
    }

    Ok((start, end))
}

fn timestamp_at(value: &str, line_num: usize) -> Result<f64, FormatError> {
    parse_timestamp(value).ok_or_else(|| FormatError::MalformedTimestamp {
        line: line_num,
        value: value.to_string(),
    })
}

/// Drop a `N` or `N.N` chapter id followed by whitespace from a title.
///
/// Titles that are only an id, or have no whitespace after it, are kept.
fn strip_chapter_id(line: &str) -> String {
    let is_digit = |c: char| c.is_ascii_digit();

    let after_major = line.trim_start_matches(is_digit);
    if after_major.len() == line.len() {
        return line.to_string();
    }
    let after_dot = after_major.strip_prefix('.').unwrap_or(after_major);
    let after_id = after_dot.trim_start_matches(is_digit);
    let title = after_id.trim_start();

    if title.is_empty() || title.len() == after_id.len() {
        return line.to_string();
    }
    title.to_string()
}
