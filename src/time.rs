//! Playback time formatting.
//!
//! Renders seconds as `M:SS` or `H:MM:SS` for time displays, seek previews
//! and chapter labels.

/// Seconds in one hour; totals at or above this use the `H:MM:SS` layout.
pub const HOUR: f64 = 3600.0;

/// Format a time in seconds for display.
///
/// Non-finite input renders as `0:00` and negative input is treated as zero.
/// Times of an hour or more render as `H:MM:SS`, shorter times as `M:SS`.
///
/// # Arguments
/// * `seconds` - Time in seconds
///
/// # Returns
/// A string such as `1:01` or `1:01:01`
pub fn format_time(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    if total >= HOUR as u64 {
        with_hours(total)
    } else {
        minutes_seconds(total)
    }
}

/// Format a current/total pair with a shared layout.
///
/// The layout is picked from `total` alone, so `0:00:30 / 1:06:40` is
/// shown instead of `0:30 / 1:06:40`.
///
/// # Arguments
/// * `current` - Current playback time in seconds
/// * `total` - Total duration in seconds
pub fn format_time_pair(current: f64, total: f64) -> (String, String) {
    let current = whole_seconds(current);
    let total_secs = whole_seconds(total);

    if total.is_finite() && total >= HOUR {
        (with_hours(current), with_hours(total_secs))
    } else {
        (minutes_seconds(current), minutes_seconds(total_secs))
    }
}

fn whole_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    seconds.floor() as u64
}

fn with_hours(total: u64) -> String {
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

// Minutes are not wrapped at 60.
fn minutes_seconds(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}
