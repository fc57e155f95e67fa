use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot modes print to stderr.
    Stderr,
    /// The terminal UI owns the screen, so logs go to a file instead.
    File(PathBuf),
}

pub fn init_logging(verbose: bool, no_color: bool, target: &LogTarget) {
    let filter = std::env::var("XMASCOUNT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    match target {
        LogTarget::Stderr => install(filter, !no_color, std::io::stderr),
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => install(filter, false, Mutex::new(file)),
            Err(err) => {
                eprintln!("Failed to open log file {}: {}", path.display(), err);
                install(filter, false, std::io::sink);
            }
        },
    }
}

fn install<W>(filter: EnvFilter, ansi: bool, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
