//! Countdown math and presentation.
//!
//! Everything in here is pure: given a reference instant (and a locale for
//! the text), the same output comes back every time. The UI and the one-shot
//! CLI modes both render through [`live_view`] and [`custom_view`].
mod display;
mod format;
mod locale;
mod minutes;
mod reference;
mod target;


pub use display::{CountdownView, DisplayState, custom_view, live_view};
pub use format::group_thousands;
pub use locale::Locale;
pub use minutes::{MS_PER_MINUTE, minutes_until};
pub use reference::{PREFILL_FORMAT, parse_reference, prefill_value};
pub use target::{TARGET_DAY, TARGET_MONTH, next_target_date};
