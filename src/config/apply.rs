use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::CountdownArgs;
use crate::error::{ConfigError, ValidationError};

use super::types::{AudioConfig, ConfigFile};

/// Applies configuration values to CLI arguments. Values given on the
/// command line win over the file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut CountdownArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "locale")
        && let Some(locale) = config.locale
    {
        args.locale = locale;
    }

    if !is_cli(matches, "tick")
        && let Some(tick) = config.tick.as_ref()
    {
        args.tick = tick.to_duration().map_err(|source| invalid("tick", source))?;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "log_file")
        && let Some(log_file) = config.log_file.as_ref()
    {
        args.log_file = Some(PathBuf::from(log_file));
    }

    if let Some(audio) = config.audio.as_ref() {
        apply_audio_config(args, matches, audio)?;
    }

    Ok(())
}

fn apply_audio_config(
    args: &mut CountdownArgs,
    matches: &ArgMatches,
    audio: &AudioConfig,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "audio_file")
        && let Some(file) = audio.file.as_ref()
    {
        args.audio_file = Some(PathBuf::from(file));
    }

    if !is_cli(matches, "audio_command")
        && let Some(command) = audio.command.as_ref()
    {
        if command.trim().is_empty() {
            return Err(invalid("audio.command", ValidationError::EmptyAudioCommand));
        }
        args.audio_command = command.clone();
    }

    if !is_cli(matches, "audio_args")
        && let Some(extra) = audio.args.as_ref()
    {
        args.audio_args = extra.clone();
    }

    if !is_cli(matches, "volume")
        && let Some(volume) = audio.volume
    {
        args.volume = volume;
    }

    if !is_cli(matches, "grace")
        && let Some(grace) = audio.grace.as_ref()
    {
        let grace = grace
            .to_duration()
            .map_err(|source| invalid("audio.grace", source))?;
        args.grace = Some(grace);
    }

    Ok(())
}

const fn invalid(field: &'static str, source: ValidationError) -> ConfigError {
    ConfigError::InvalidField { field, source }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Environment values (e.g. `NO_COLOR`) are as explicit as the command line.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
