//! Background music: the play/pause state machine and the players behind it.
mod player;
mod toggle;
mod volume;

#[cfg(test)]
mod tests;

pub use player::{
    AudioPlayer, CommandPlayer, DEFAULT_AUDIO_ARGS, DEFAULT_AUDIO_COMMAND, DEFAULT_GRACE,
    PlayerSettings,
};
pub use toggle::{AudioToggle, ControlAffordance, PlaybackAlert, PlaybackState, ToggleCommand};
pub use volume::Volume;
