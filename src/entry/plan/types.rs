use std::time::Duration;

use crate::audio::{PlayerSettings, Volume};
use crate::countdown::Locale;
use crate::logger::LogTarget;

pub(in crate::entry) struct LogSettings {
    pub(in crate::entry) verbose: bool,
    pub(in crate::entry) no_color: bool,
    pub(in crate::entry) target: LogTarget,
}

pub(in crate::entry) struct UiPlan {
    pub(super) locale: Locale,
    pub(super) no_color: bool,
    pub(super) tick: Duration,
    pub(super) volume: Volume,
    pub(super) player: PlayerSettings,
}

pub(in crate::entry) enum RunPlan {
    Once { locale: Locale },
    At { locale: Locale, input: String },
    Ui(UiPlan),
}
