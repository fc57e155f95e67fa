use clap::ArgMatches;

use crate::args::{CountdownArgs, default_log_path};
use crate::audio::{DEFAULT_AUDIO_ARGS, DEFAULT_GRACE, PlayerSettings};
use crate::error::{AppError, AppResult, ValidationError};
use crate::logger::LogTarget;

use super::types::{LogSettings, RunPlan, UiPlan};

pub(crate) fn build_plan(
    mut args: CountdownArgs,
    matches: &ArgMatches,
) -> AppResult<(LogSettings, RunPlan)> {
    apply_config(&mut args, matches)?;

    if args.audio_command.trim().is_empty() {
        return Err(AppError::validation(ValidationError::EmptyAudioCommand));
    }

    let one_shot = args.once || args.at.is_some();
    let target = if one_shot {
        LogTarget::Stderr
    } else {
        LogTarget::File(args.log_file.clone().unwrap_or_else(default_log_path))
    };
    let logging = LogSettings {
        verbose: args.verbose,
        no_color: args.no_color,
        target,
    };

    if let Some(input) = args.at.take() {
        return Ok((
            logging,
            RunPlan::At {
                locale: args.locale,
                input,
            },
        ));
    }
    if args.once {
        return Ok((
            logging,
            RunPlan::Once {
                locale: args.locale,
            },
        ));
    }

    Ok((logging, RunPlan::Ui(ui_plan(args))))
}

fn apply_config(args: &mut CountdownArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn ui_plan(args: CountdownArgs) -> UiPlan {
    let player_args = if args.audio_args.is_empty() {
        DEFAULT_AUDIO_ARGS.iter().map(|arg| (*arg).to_owned()).collect()
    } else {
        args.audio_args
    };
    UiPlan {
        locale: args.locale,
        no_color: args.no_color,
        tick: args.tick,
        volume: args.volume,
        player: PlayerSettings {
            file: args.audio_file,
            program: args.audio_command,
            args: player_args,
            grace: args.grace.unwrap_or(DEFAULT_GRACE),
        },
    }
}
