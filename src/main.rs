mod args;
mod audio;
mod config;
mod countdown;
mod entry;
mod error;
mod logger;
mod shutdown;
mod shutdown_handlers;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
