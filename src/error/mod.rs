mod app;
mod audio;
mod config;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use audio::AudioError;
pub use config::ConfigError;
pub use validation::ValidationError;
