use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

pub const TARGET_MONTH: u32 = 12;
pub const TARGET_DAY: u32 = 25;

/// Last millisecond of the target day, measured from its midnight.
const TARGET_DAY_LAST_MS: i64 = 24 * 60 * 60 * 1_000 - 1;
/// Step used to walk out of a DST gap when midnight does not exist locally.
const GAP_STEP_MINUTES: i64 = 15;
/// Upper bound on gap steps (one full day of quarter hours).
const GAP_MAX_STEPS: usize = 96;

/// Returns the December 25th (local midnight) that `reference` counts down to.
///
/// The whole of December 25th still belongs to that year's target, so a
/// reference at 23:59:59.999 on the day itself yields the same year and a
/// countdown of zero. Only once the day is over does the target roll to the
/// following year.
#[must_use]
pub fn next_target_date<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Tz> {
    let zone = reference.timezone();
    let year = reference.year();
    let candidate = target_in_year(&zone, year);

    let day_end = candidate
        .clone()
        .checked_add_signed(TimeDelta::milliseconds(TARGET_DAY_LAST_MS));
    match day_end {
        Some(end) if *reference > end => target_in_year(&zone, year.saturating_add(1)),
        Some(_) | None => candidate,
    }
}

pub(crate) fn target_in_year<Tz: TimeZone>(zone: &Tz, year: i32) -> DateTime<Tz> {
    let midnight = NaiveDate::from_ymd_opt(year, TARGET_MONTH, TARGET_DAY)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX);
    resolve_local(zone, midnight)
}

fn resolve_local<Tz: TimeZone>(zone: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut local = naive;
    for _ in 0..GAP_MAX_STEPS {
        if let Some(resolved) = zone.from_local_datetime(&local).earliest() {
            return resolved;
        }
        match local.checked_add_signed(TimeDelta::minutes(GAP_STEP_MINUTES)) {
            Some(next) => local = next,
            None => break,
        }
    }
    tracing::debug!("No local mapping for {}, falling back to UTC", naive);
    zone.from_utc_datetime(&naive)
}
