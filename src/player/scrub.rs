//! Progress bar scrubbing.
//!
//! Maps pointer positions on the progress bar to media time, and throttles
//! hover updates that drive the seek preview.

use std::time::{Duration, Instant};

use crate::time::format_time_pair;

/// Convert a position along the progress bar to a time.
///
/// # Arguments
/// * `fraction` - Position from 0.0 (start) to 1.0 (end); clamped
/// * `duration` - Total duration in seconds
pub fn fraction_to_time(fraction: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    fraction * duration
}

/// Playback progress in percent, clamped to 0-100.
///
/// An unknown or zero duration counts as no progress.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

/// What the seek preview shows for a hover position.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPreview {
    /// Position along the bar, 0.0-1.0
    pub position: f64,
    /// Media time under the pointer
    pub time: f64,
    /// Time label, laid out like the total duration
    pub label: String,
}

/// Throttled hover tracking for the progress bar.
#[derive(Debug, Clone)]
pub struct HoverTracker {
    throttle: Duration,
    last_update: Option<Instant>,
    preview: Option<HoverPreview>,
}

impl HoverTracker {
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            last_update: None,
            preview: None,
        }
    }

    /// Record a pointer move.
    ///
    /// Moves arriving within the throttle interval of the last accepted
    /// move are dropped.
    ///
    /// # Arguments
    /// * `fraction` - Pointer position along the bar
    /// * `duration` - Total duration in seconds
    /// * `now` - Time of the move
    ///
    /// # Returns
    /// The new preview, or `None` if the move was throttled
    pub fn update(&mut self, fraction: f64, duration: f64, now: Instant) -> Option<&HoverPreview> {
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < self.throttle {
                return None;
            }
        }
        self.last_update = Some(now);

        let position = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let time = fraction_to_time(position, duration);
        let (label, _) = format_time_pair(time, duration);

        self.preview = Some(HoverPreview {
            position,
            time,
            label,
        });
        self.preview.as_ref()
    }

    /// The pointer left the bar.
    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// The preview currently shown, if the pointer is over the bar.
    pub fn preview(&self) -> Option<&HoverPreview> {
        self.preview.as_ref()
    }
}
