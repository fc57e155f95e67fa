//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::CountdownArgs;

pub(crate) use defaults::default_log_path;
pub(crate) use parsers::parse_duration_value;
