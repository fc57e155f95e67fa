use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::tempdir;

use super::*;
use crate::error::{AppError, AppResult, AudioError};

/// Player that replays canned outcomes and counts calls.
struct ScriptedPlayer {
    outcomes: VecDeque<Result<(), AudioError>>,
    plays: usize,
    pauses: usize,
}

impl ScriptedPlayer {
    fn new(outcomes: Vec<Result<(), AudioError>>) -> Self {
        Self {
            outcomes: outcomes.into(),
            plays: 0,
            pauses: 0,
        }
    }
}

#[async_trait]
impl AudioPlayer for ScriptedPlayer {
    async fn play(&mut self, _volume: Volume) -> Result<(), AudioError> {
        self.plays = self.plays.saturating_add(1);
        self.outcomes.pop_front().unwrap_or(Ok(()))
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        self.pauses = self.pauses.saturating_add(1);
        Ok(())
    }
}

fn rejected() -> AudioError {
    AudioError::Rejected {
        reason: "device busy".to_owned(),
    }
}

/// Runs one click against `player` the way the UI loop does.
async fn click(
    toggle: &mut AudioToggle,
    player: &mut ScriptedPlayer,
) -> AppResult<Option<PlaybackAlert>> {
    match toggle.click() {
        Some(ToggleCommand::Play { volume }) => {
            let outcome = player.play(volume).await;
            Ok(toggle.play_resolved(outcome))
        }
        Some(ToggleCommand::Pause) => Ok(toggle.pause_resolved(player.pause())),
        None => Ok(None),
    }
}

#[test]
fn toggle_starts_paused() -> AppResult<()> {
    let toggle = AudioToggle::new(Volume::default());
    if toggle.state() != PlaybackState::Paused {
        return Err(AppError::validation("Expected initial Paused state"));
    }
    if toggle.affordance() != ControlAffordance::Play {
        return Err(AppError::validation("Expected play affordance"));
    }
    if toggle.is_starting() {
        return Err(AppError::validation("Expected no pending start"));
    }
    Ok(())
}

#[test]
fn clicks_are_ignored_while_start_is_pending() -> AppResult<()> {
    let mut toggle = AudioToggle::new(Volume::default());
    let first = toggle.click();
    if first
        != Some(ToggleCommand::Play {
            volume: Volume::default(),
        })
    {
        return Err(AppError::validation(format!(
            "Unexpected command {:?}",
            first
        )));
    }
    if toggle.affordance() != ControlAffordance::Starting {
        return Err(AppError::validation("Expected starting affordance"));
    }
    if toggle.click().is_some() {
        return Err(AppError::validation("Second click should be ignored"));
    }
    if toggle.state() != PlaybackState::Paused {
        return Err(AppError::validation("State must not change before resolution"));
    }
    Ok(())
}

#[test]
fn successful_start_then_pause() -> AppResult<()> {
    let mut toggle = AudioToggle::new(Volume::default());
    toggle.click();
    if toggle.play_resolved(Ok(())).is_some() {
        return Err(AppError::validation("Success must not raise an alert"));
    }
    if toggle.state() != PlaybackState::Playing
        || toggle.affordance() != ControlAffordance::Pause
    {
        return Err(AppError::validation("Expected Playing with pause affordance"));
    }
    if toggle.click() != Some(ToggleCommand::Pause) {
        return Err(AppError::validation("Expected pause command"));
    }
    if toggle.state() != PlaybackState::Paused
        || toggle.affordance() != ControlAffordance::Play
    {
        return Err(AppError::validation("Expected Paused with play affordance"));
    }
    Ok(())
}

#[test]
fn rejected_start_stays_paused_with_one_alert() -> AppResult<()> {
    let mut toggle = AudioToggle::new(Volume::default());
    toggle.click();
    let alert = toggle.play_resolved(Err(rejected()));
    match alert {
        Some(alert) if alert.reason.contains("device busy") => {}
        other => {
            return Err(AppError::validation(format!(
                "Unexpected alert {:?}",
                other
            )));
        }
    }
    if toggle.state() != PlaybackState::Paused {
        return Err(AppError::validation("Rejected start must stay Paused"));
    }
    if toggle.play_resolved(Err(rejected())).is_some() {
        return Err(AppError::validation(
            "Stray outcome without a pending start must not alert",
        ));
    }
    Ok(())
}

#[test]
fn failed_stop_goes_back_to_playing_with_an_alert() -> AppResult<()> {
    let mut toggle = AudioToggle::new(Volume::default());
    toggle.click();
    toggle.play_resolved(Ok(()));
    if toggle.click() != Some(ToggleCommand::Pause) {
        return Err(AppError::validation("Expected pause command"));
    }

    let alert = toggle.pause_resolved(Err(AudioError::Stop {
        source: std::io::Error::other("permission denied"),
    }));
    match alert {
        Some(alert) if alert.reason.contains("permission denied") => {}
        other => {
            return Err(AppError::validation(format!(
                "Unexpected alert {:?}",
                other
            )));
        }
    }
    if toggle.state() != PlaybackState::Playing
        || toggle.affordance() != ControlAffordance::Pause
    {
        return Err(AppError::validation(
            "Player still running, state must stay Playing",
        ));
    }

    if toggle.click() != Some(ToggleCommand::Pause) {
        return Err(AppError::validation("Retrying the stop should be possible"));
    }
    if toggle.pause_resolved(Ok(())).is_some() || toggle.state() != PlaybackState::Paused {
        return Err(AppError::validation("Successful stop should leave Paused"));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_player_drives_the_toggle() -> AppResult<()> {
    let mut toggle = AudioToggle::new(Volume::default());
    let mut player = ScriptedPlayer::new(vec![Err(rejected()), Ok(())]);

    let mut alerts = 0usize;
    if click(&mut toggle, &mut player).await?.is_some() {
        alerts = alerts.saturating_add(1);
    }
    if click(&mut toggle, &mut player).await?.is_some() {
        alerts = alerts.saturating_add(1);
    }
    click(&mut toggle, &mut player).await?;

    let checks = [
        (alerts == 1, "Expected exactly one alert"),
        (player.plays == 2, "Expected two play attempts"),
        (player.pauses == 1, "Expected one pause"),
        (
            toggle.state() == PlaybackState::Paused,
            "Expected Paused at the end",
        ),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn volume_parses_percentages() -> AppResult<()> {
    let cases = [("0", 0u8), ("50", 50), ("75%", 75), (" 100 ", 100)];
    for (input, expected) in cases {
        let volume: Volume = input.parse()?;
        if volume.percent() != expected {
            return Err(AppError::validation(format!(
                "'{}' parsed as {}",
                input, volume
            )));
        }
    }
    for input in ["101", "-1", "loud", "0.5", ""] {
        if input.parse::<Volume>().is_ok() {
            return Err(AppError::validation(format!(
                "'{}' should be rejected",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn render_args_fills_placeholders() -> AppResult<()> {
    let settings = PlayerSettings {
        args: vec![
            "--volume={volume}".to_owned(),
            "--loop".to_owned(),
            "{file}".to_owned(),
        ],
        ..PlayerSettings::default()
    };
    let volume: Volume = "30".parse()?;
    let args = settings.render_args("/music/jingle.ogg", volume);
    if args != ["--volume=30", "--loop", "/music/jingle.ogg"] {
        return Err(AppError::validation(format!("Unexpected args {:?}", args)));
    }

    let defaults = PlayerSettings::default().render_args("song.mp3", Volume::default());
    let ends_with_file = defaults.last().map(String::as_str) == Some("song.mp3");
    if !ends_with_file || !defaults.contains(&"50".to_owned()) {
        return Err(AppError::validation(format!(
            "Unexpected default args {:?}",
            defaults
        )));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn command_player_requires_a_source() -> AppResult<()> {
    let mut player = CommandPlayer::new(PlayerSettings::default());
    match player.play(Volume::default()).await {
        Err(AudioError::NoSource) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected NoSource, got {:?}",
                other
            )));
        }
    }

    let dir = tempdir()?;
    let mut player = CommandPlayer::new(PlayerSettings {
        file: Some(dir.path().join("missing.ogg")),
        ..PlayerSettings::default()
    });
    match player.play(Volume::default()).await {
        Err(AudioError::MissingFile { .. }) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected MissingFile, got {:?}",
            other
        ))),
    }
}

fn touch_track(dir: &tempfile::TempDir) -> AppResult<PathBuf> {
    let path = dir.path().join("track.ogg");
    std::fs::write(&path, b"not really audio")?;
    Ok(path)
}

#[tokio::test(flavor = "current_thread")]
async fn command_player_reports_spawn_failure() -> AppResult<()> {
    let dir = tempdir()?;
    let mut player = CommandPlayer::new(PlayerSettings {
        file: Some(touch_track(&dir)?),
        program: "xmascount-no-such-player".to_owned(),
        ..PlayerSettings::default()
    });
    match player.play(Volume::default()).await {
        Err(AudioError::Spawn { .. }) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected Spawn error, got {:?}",
            other
        ))),
    }
}

#[cfg(unix)]
#[tokio::test(flavor = "current_thread")]
async fn command_player_treats_early_exit_as_failure() -> AppResult<()> {
    let dir = tempdir()?;
    let mut player = CommandPlayer::new(PlayerSettings {
        file: Some(touch_track(&dir)?),
        program: "true".to_owned(),
        args: Vec::new(),
        grace: Duration::from_secs(5),
    });
    match player.play(Volume::default()).await {
        Err(AudioError::ExitedEarly { .. }) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected ExitedEarly, got {:?}",
                other
            )));
        }
    }
    if player.is_running() {
        return Err(AppError::validation("Failed start must not keep a child"));
    }
    Ok(())
}

#[cfg(unix)]
#[tokio::test(flavor = "current_thread")]
async fn command_player_starts_and_stops_long_running_player() -> AppResult<()> {
    let dir = tempdir()?;
    let mut player = CommandPlayer::new(PlayerSettings {
        file: Some(touch_track(&dir)?),
        program: "sleep".to_owned(),
        args: vec!["30".to_owned()],
        grace: Duration::from_millis(100),
    });
    player.play(Volume::default()).await?;
    if !player.is_running() {
        return Err(AppError::validation("Expected a running player"));
    }
    player.pause()?;
    if player.is_running() {
        return Err(AppError::validation("Pause should stop the player"));
    }
    player.pause()?;
    Ok(())
}
