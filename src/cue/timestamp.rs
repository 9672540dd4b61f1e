//! Cue timestamp grammar.
//!
//! Timestamps are `HH:MM:SS` with an optional `.mmm` fraction. All three
//! clock fields are required; the fraction defaults to zero.

/// Parse a cue timestamp into absolute seconds.
///
/// The value is `H*3600 + M*60 + S + F/1000`, where `F` is the digits after
/// the dot read as an integer. Surrounding whitespace is ignored.
///
/// # Returns
/// `None` if a field is missing, empty, or not made of ASCII digits
pub fn parse_timestamp(value: &str) -> Option<f64> {
    let mut fields = value.trim().split(':');
    let hours = fields.next().and_then(digits)?;
    let minutes = fields.next().and_then(digits)?;
    let seconds_field = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let (seconds, fraction) = match seconds_field.split_once('.') {
        Some((secs, frac)) => (digits(secs)?, digits(frac)?),
        None => (digits(seconds_field)?, 0),
    };

    Some(
        hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + fraction as f64 / 1000.0,
    )
}

fn digits(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
