use chrono::{DateTime, TimeZone};

pub const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes from `reference` to `target`, floored.
///
/// A target at or before the reference is zero minutes away.
#[must_use]
pub fn minutes_until<Tz1, Tz2>(reference: &DateTime<Tz1>, target: &DateTime<Tz2>) -> u64
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let diff_ms = target
        .timestamp_millis()
        .saturating_sub(reference.timestamp_millis());
    if diff_ms <= 0 {
        return 0;
    }
    diff_ms
        .checked_div(MS_PER_MINUTE)
        .and_then(|minutes| u64::try_from(minutes).ok())
        .unwrap_or(0)
}
