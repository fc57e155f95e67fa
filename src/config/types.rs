use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_value;
use crate::audio::Volume;
use crate::countdown::Locale;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub locale: Option<Locale>,
    pub tick: Option<DurationValue>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    pub log_file: Option<String>,
    pub audio: Option<AudioConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioConfig {
    pub file: Option<String>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub volume: Option<Volume>,
    pub grace: Option<DurationValue>,
}

/// A duration written either as whole seconds or as text with a unit.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
