use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::{Child, Command};

use crate::error::AudioError;

use super::volume::Volume;

pub const DEFAULT_AUDIO_COMMAND: &str = "ffplay";
pub const DEFAULT_AUDIO_ARGS: [&str; 9] = [
    "-nodisp",
    "-autoexit",
    "-loglevel",
    "quiet",
    "-loop",
    "0",
    "-volume",
    "{volume}",
    "{file}",
];
/// How long a freshly spawned player has to stay alive to count as playing.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(250);

const FILE_PLACEHOLDER: &str = "{file}";
const VOLUME_PLACEHOLDER: &str = "{volume}";

/// Something that can start and stop the background track.
#[async_trait]
pub trait AudioPlayer: Send {
    /// Starts playback and resolves once it is known whether it worked.
    ///
    /// # Errors
    ///
    /// Returns an error when playback could not be started.
    async fn play(&mut self, volume: Volume) -> Result<(), AudioError>;

    /// Stops playback immediately. Stopping an idle player is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when a running player cannot be stopped.
    fn pause(&mut self) -> Result<(), AudioError>;
}

#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub file: Option<PathBuf>,
    pub program: String,
    pub args: Vec<String>,
    pub grace: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            file: None,
            program: DEFAULT_AUDIO_COMMAND.to_owned(),
            args: DEFAULT_AUDIO_ARGS.iter().map(|arg| (*arg).to_owned()).collect(),
            grace: DEFAULT_GRACE,
        }
    }
}

impl PlayerSettings {
    pub(crate) fn render_args(&self, file: &str, volume: Volume) -> Vec<String> {
        let volume = volume.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(FILE_PLACEHOLDER, file)
                    .replace(VOLUME_PLACEHOLDER, &volume)
            })
            .collect()
    }
}

/// Plays the track through an external player process.
///
/// A start counts as successful when the process is still running once the
/// grace period is over. Pausing kills the process; so does dropping the
/// player.
#[derive(Debug)]
pub struct CommandPlayer {
    settings: PlayerSettings,
    child: Option<Child>,
}

impl CommandPlayer {
    #[must_use]
    pub const fn new(settings: PlayerSettings) -> Self {
        Self {
            settings,
            child: None,
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.child.is_some()
    }

    fn source(&self) -> Result<String, AudioError> {
        let path = self.settings.file.as_ref().ok_or(AudioError::NoSource)?;
        if !path.exists() {
            return Err(AudioError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Ok(path.to_string_lossy().into_owned())
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    async fn play(&mut self, volume: Volume) -> Result<(), AudioError> {
        self.pause()?;
        let file = self.source()?;
        let program = self.settings.program.clone();
        let args = self.settings.render_args(&file, volume);
        tracing::debug!("Starting player: {} {:?}", program, args);

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AudioError::Spawn {
                program: program.clone(),
                source,
            })?;

        match tokio::time::timeout(self.settings.grace, child.wait()).await {
            Ok(Ok(status)) => Err(AudioError::ExitedEarly { program, status }),
            Ok(Err(source)) => Err(AudioError::Wait { program, source }),
            Err(_elapsed) => {
                self.child = Some(child);
                Ok(())
            }
        }
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        if let Some(mut child) = self.child.take() {
            tracing::debug!("Stopping player");
            if let Err(source) = child.start_kill() {
                self.child = Some(child);
                return Err(AudioError::Stop { source });
            }
        }
        Ok(())
    }
}
