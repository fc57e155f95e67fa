use crate::countdown::Locale;
use crate::error::AudioError;

use super::volume::Volume;

/// Whether music is audible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Work the caller must perform after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleCommand {
    /// Start playback; report the outcome through [`AudioToggle::play_resolved`].
    Play { volume: Volume },
    /// Stop playback right away.
    Pause,
}

/// A failed start the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackAlert {
    pub reason: String,
}

/// What the music control currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAffordance {
    Play,
    Pause,
    Starting,
}

impl ControlAffordance {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            ControlAffordance::Play | ControlAffordance::Starting => "🔇",
            ControlAffordance::Pause => "🎵",
        }
    }

    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            ControlAffordance::Play => locale.play_label(),
            ControlAffordance::Pause => locale.pause_label(),
            ControlAffordance::Starting => locale.starting_label(),
        }
    }
}

/// Play/pause state machine for the music control.
///
/// The state only becomes [`PlaybackState::Playing`] once a start attempt has
/// actually succeeded. While an attempt is in flight, clicks are ignored so
/// the tracked state never drifts from what the player is doing.
#[derive(Debug, Clone)]
pub struct AudioToggle {
    state: PlaybackState,
    starting: bool,
    volume: Volume,
}

impl AudioToggle {
    #[must_use]
    pub const fn new(volume: Volume) -> Self {
        Self {
            state: PlaybackState::Paused,
            starting: false,
            volume,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub const fn is_starting(&self) -> bool {
        self.starting
    }

    #[must_use]
    pub const fn affordance(&self) -> ControlAffordance {
        if self.starting {
            return ControlAffordance::Starting;
        }
        match self.state {
            PlaybackState::Paused => ControlAffordance::Play,
            PlaybackState::Playing => ControlAffordance::Pause,
        }
    }

    pub fn click(&mut self) -> Option<ToggleCommand> {
        if self.starting {
            tracing::debug!("Ignoring music toggle while playback is starting");
            return None;
        }
        match self.state {
            PlaybackState::Paused => {
                self.starting = true;
                Some(ToggleCommand::Play {
                    volume: self.volume,
                })
            }
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                Some(ToggleCommand::Pause)
            }
        }
    }

    /// Applies the outcome of a stop issued by [`Self::click`].
    ///
    /// A player that could not be stopped is still audible, so the state goes
    /// back to [`PlaybackState::Playing`] and the failure is reported.
    pub fn pause_resolved(&mut self, outcome: Result<(), AudioError>) -> Option<PlaybackAlert> {
        match outcome {
            Ok(()) => {
                tracing::info!("Music paused");
                None
            }
            Err(err) => {
                tracing::error!("Stopping playback failed: {}", err);
                self.state = PlaybackState::Playing;
                Some(PlaybackAlert {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Applies the outcome of a start attempt issued by [`Self::click`].
    pub fn play_resolved(&mut self, outcome: Result<(), AudioError>) -> Option<PlaybackAlert> {
        if !self.starting {
            tracing::warn!("Dropping playback outcome with no start attempt pending");
            return None;
        }
        self.starting = false;
        match outcome {
            Ok(()) => {
                tracing::info!("Music playing at {}%", self.volume);
                self.state = PlaybackState::Playing;
                None
            }
            Err(err) => {
                tracing::error!("Playback failed: {}", err);
                Some(PlaybackAlert {
                    reason: err.to_string(),
                })
            }
        }
    }
}
