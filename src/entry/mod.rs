mod plan;

use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CountdownArgs;
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;
    let (logging, plan) = build_plan(args, &matches)?;

    crate::logger::init_logging(logging.verbose, logging.no_color, &logging.target);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<(CountdownArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = CountdownArgs::command().get_matches_from(raw_args);
    let args = CountdownArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
