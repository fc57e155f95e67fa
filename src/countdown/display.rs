use chrono::{DateTime, Datelike, TimeZone};

use super::format::group_thousands;
use super::locale::Locale;
use super::minutes::minutes_until;
use super::reference::parse_reference;
use super::target::next_target_date;

/// Countdown numbers for one reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub minutes_remaining: u64,
    pub target_year: i32,
}

impl DisplayState {
    #[must_use]
    pub fn from_reference<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        let target = next_target_date(reference);
        Self {
            minutes_remaining: minutes_until(reference, &target),
            target_year: target.year(),
        }
    }

    #[must_use]
    pub fn minutes_text(&self, locale: Locale) -> String {
        group_thousands(self.minutes_remaining, locale.thousands_separator())
    }
}

/// Text for one display region: the grouped minutes and the label under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    pub minutes: String,
    pub label: String,
}

/// What the live region shows for `now`.
#[must_use]
pub fn live_view<Tz: TimeZone>(now: &DateTime<Tz>, locale: Locale) -> CountdownView {
    let state = DisplayState::from_reference(now);
    CountdownView {
        minutes: state.minutes_text(locale),
        label: locale.live_label(state.target_year),
    }
}

/// What the custom region shows for `input`, or `None` when it stays hidden.
pub fn custom_view<Tz: TimeZone>(input: &str, zone: &Tz, locale: Locale) -> Option<CountdownView> {
    let reference = parse_reference(input, zone)?;
    let state = DisplayState::from_reference(&reference);
    Some(CountdownView {
        minutes: state.minutes_text(locale),
        label: locale.custom_label(state.target_year),
    })
}
