use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::audio::{DEFAULT_AUDIO_COMMAND, Volume};
use crate::countdown::Locale;

use super::defaults::{DEFAULT_TICK, DEFAULT_VOLUME};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_volume};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minutes until Christmas in your terminal - live countdown, custom reference dates, and a music toggle."
)]
pub struct CountdownArgs {
    /// Print the countdown from a custom local date/time (e.g. 2024-12-24T23:00) and exit
    #[arg(long = "at", conflicts_with = "once", help_heading = "One-shot")]
    pub at: Option<String>,

    /// Print the live countdown once and exit
    #[arg(long, help_heading = "One-shot")]
    pub once: bool,

    /// Language for labels and number grouping
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Refresh interval of the live counter (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_TICK, value_parser = parse_duration_arg)]
    pub tick: Duration,

    /// Audio file played by the music control
    #[arg(long = "audio-file", help_heading = "Music")]
    pub audio_file: Option<PathBuf>,

    /// Player program for the music control
    #[arg(long = "audio-command", default_value = DEFAULT_AUDIO_COMMAND, help_heading = "Music")]
    pub audio_command: String,

    /// Player argument; {file} and {volume} are substituted (repeatable, replaces the defaults)
    #[arg(
        long = "audio-arg",
        allow_hyphen_values = true,
        help_heading = "Music"
    )]
    pub audio_args: Vec<String>,

    /// Playback volume in percent (0-100)
    #[arg(long, default_value = DEFAULT_VOLUME, value_parser = parse_volume, help_heading = "Music")]
    pub volume: Volume,

    /// How long the player must keep running to count as started (ms/s/m/h; default 250ms)
    #[arg(long, value_parser = parse_duration_arg, help_heading = "Music")]
    pub grace: Option<Duration>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by XMASCOUNT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log file used while the terminal UI is open (defaults to ~/.xmascount/xmascount.log)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Path to config file (TOML/JSON). Defaults to ./xmascount.toml or ./xmascount.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
