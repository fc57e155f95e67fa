use crate::audio::{ControlAffordance, PlaybackAlert};
use crate::countdown::{CountdownView, Locale};

/// Snapshot of everything one frame draws.
#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub locale: Locale,
    pub no_color: bool,
    pub live: CountdownView,
    pub input: String,
    /// `None` keeps the custom result region hidden.
    pub custom: Option<CountdownView>,
    pub control: ControlAffordance,
    pub alert: Option<PlaybackAlert>,
}
