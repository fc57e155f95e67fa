use clap::Parser;

use crate::error::{AppError, AppResult};

use super::CountdownArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<CountdownArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CountdownArgs::try_parse_from(args).map_err(AppError::from)
}
