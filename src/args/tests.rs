use std::path::PathBuf;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_value};
use super::test_support::parse_test_args;
use crate::audio::DEFAULT_AUDIO_COMMAND;
use crate::countdown::Locale;
use crate::error::{AppError, AppResult, ValidationError};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["xmascount"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (args.at.is_none(), "Expected at to be None"),
        (!args.once, "Expected once to be false"),
        (args.locale == Locale::En, "Expected Locale::En"),
        (args.tick == Duration::from_secs(1), "Unexpected tick"),
        (args.audio_file.is_none(), "Expected audio_file to be None"),
        (
            args.audio_command == DEFAULT_AUDIO_COMMAND,
            "Unexpected audio_command",
        ),
        (args.audio_args.is_empty(), "Expected no audio args"),
        (args.volume.percent() == 50, "Unexpected volume"),
        (args.grace.is_none(), "Expected grace to be None"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
        (!args.verbose, "Expected verbose to be false"),
        (args.log_file.is_none(), "Expected log_file to be None"),
        (args.config.is_none(), "Expected config to be None"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_custom_values() -> AppResult<()> {
    let args = parse_test_args([
        "xmascount",
        "--locale",
        "it",
        "--tick",
        "500ms",
        "--audio-file",
        "/tmp/jingle.ogg",
        "--audio-command",
        "mpv",
        "--audio-arg",
        "--no-video",
        "--audio-arg",
        "--volume={volume}",
        "--audio-arg",
        "{file}",
        "--volume",
        "80%",
        "--grace",
        "1s",
        "--log-file",
        "/tmp/xmascount.log",
        "-v",
    ])?;

    let checks = [
        (args.locale == Locale::It, "Expected Locale::It"),
        (args.tick == Duration::from_millis(500), "Unexpected tick"),
        (
            args.audio_file == Some(PathBuf::from("/tmp/jingle.ogg")),
            "Unexpected audio_file",
        ),
        (args.audio_command == "mpv", "Unexpected audio_command"),
        (
            args.audio_args == ["--no-video", "--volume={volume}", "{file}"],
            "Unexpected audio_args",
        ),
        (args.volume.percent() == 80, "Unexpected volume"),
        (args.grace == Some(Duration::from_secs(1)), "Unexpected grace"),
        (
            args.log_file == Some(PathBuf::from("/tmp/xmascount.log")),
            "Unexpected log_file",
        ),
        (args.verbose, "Expected verbose"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_one_shot_modes() -> AppResult<()> {
    let args = parse_test_args(["xmascount", "--at", "2024-12-24T23:00"])?;
    if args.at.as_deref() != Some("2024-12-24T23:00") {
        return Err(AppError::validation("Unexpected at"));
    }
    let args = parse_test_args(["xmascount", "--once"])?;
    if !args.once {
        return Err(AppError::validation("Expected once"));
    }
    if parse_test_args(["xmascount", "--once", "--at", "2024-12-24"]).is_ok() {
        return Err(AppError::validation("--once and --at must conflict"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_invalid_values() -> AppResult<()> {
    let invalid = [
        vec!["xmascount", "--volume", "101"],
        vec!["xmascount", "--volume", "quiet"],
        vec!["xmascount", "--tick", "0s"],
        vec!["xmascount", "--tick", "soon"],
        vec!["xmascount", "--locale", "fr"],
        vec!["xmascount", "--grace", "3d"],
    ];
    for args in invalid {
        if parse_test_args(args.clone()).is_ok() {
            return Err(AppError::validation(format!(
                "Expected parse failure for {:?}",
                args
            )));
        }
    }
    Ok(())
}

#[test]
fn duration_values_support_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("2", Duration::from_secs(2)),
        ("2s", Duration::from_secs(2)),
        ("5m", Duration::from_secs(300)),
        ("1h", Duration::from_secs(3_600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "'{}' parsed as {:?}",
                input, parsed
            )));
        }
    }
    match parse_duration_value("") {
        Err(ValidationError::DurationEmpty) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected DurationEmpty, got {:?}",
                other
            )));
        }
    }
    match parse_duration_value("10y") {
        Err(ValidationError::InvalidDurationUnit { unit }) if unit == "y" => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected InvalidDurationUnit, got {:?}",
            other
        ))),
    }
}

#[test]
fn bool_env_values() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("'{}' should be true", value)));
        }
    }
    for value in ["0", "false", "No", "off"] {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("'{}' should be false", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("'maybe' should be rejected"));
    }
    Ok(())
}
