use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Format the custom input is pre-populated with.
pub const PREFILL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];
const DATE_FORMAT: &str = "%Y-%m-%d";
const FRACTION_SPECIFIER: &str = "%.f";

/// Parses a custom reference entered in local time.
///
/// Returns `None` for empty input, anything that is not one of the accepted
/// formats, and local times that fall into a DST gap.
pub fn parse_reference<Tz: TimeZone>(input: &str, zone: &Tz) -> Option<DateTime<Tz>> {
    let naive = parse_naive(input.trim())?;
    zone.from_local_datetime(&naive).earliest()
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    if input.is_empty() {
        return None;
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| parse_fixed_width(input, format))
        .or_else(|| {
            NaiveDate::parse_from_str(input, DATE_FORMAT)
                .ok()
                .filter(|date| date.format(DATE_FORMAT).to_string() == input)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses `input` with `format`, then requires every field to be zero padded.
///
/// chrono accepts `2024-12-2` for `%Y-%m-%d`; a half-typed value must not
/// count as a date, so the input has to match its own canonical rendering.
/// Fractional seconds are variable width and are left out of the comparison.
fn parse_fixed_width(input: &str, format: &str) -> Option<NaiveDateTime> {
    let naive = NaiveDateTime::parse_from_str(input, format).ok()?;
    let (fixed_format, fixed_input) = match format.strip_suffix(FRACTION_SPECIFIER) {
        Some(base) => (base, input.split_once('.').map_or(input, |(head, _)| head)),
        None => (format, input),
    };
    (naive.format(fixed_format).to_string() == fixed_input).then_some(naive)
}

/// Renders `now` the way the custom input field shows it.
#[must_use]
pub fn prefill_value<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(PREFILL_FORMAT).to_string()
}
