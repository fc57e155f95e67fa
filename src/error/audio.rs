use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("No audio file configured (set --audio-file or [audio] file).")]
    NoSource,
    #[error("Audio file '{path}' does not exist.")]
    MissingFile { path: String },
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited during startup with status {status}")]
    ExitedEarly { program: String, status: ExitStatus },
    #[error("Failed to watch '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to stop playback: {source}")]
    Stop {
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Playback rejected: {reason}")]
    Rejected { reason: String },
}
